pub mod instructor_statuses;
pub mod notification_types;
pub mod plan_formats;
pub mod plan_statuses;
pub mod reservation_statuses;
pub mod student_plan_statuses;
pub mod student_statuses;
pub mod user_roles;
