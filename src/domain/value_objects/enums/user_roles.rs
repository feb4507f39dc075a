use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Administrator,
    Student,
    Instructor,
}

impl Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let role = match self {
            UserRole::Administrator => "ADMINISTRATOR",
            UserRole::Student => "STUDENT",
            UserRole::Instructor => "INSTRUCTOR",
        };
        write!(f, "{}", role)
    }
}
