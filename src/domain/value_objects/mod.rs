pub mod auth;
pub mod enums;
pub mod instructors;
pub mod notifications;
pub mod pagination;
pub mod plans;
pub mod reservations;
pub mod responses;
pub mod schedules;
pub mod student_plans;
pub mod students;
