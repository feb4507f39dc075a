pub mod instructors;
pub mod notifications;
pub mod plans;
pub mod reservations;
pub mod schedules;
pub mod student_plans;
pub mod students;
pub mod users;
