use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstructorStatus {
    #[default]
    Active,
    Inactive,
}

impl Display for InstructorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            InstructorStatus::Active => "ACTIVE",
            InstructorStatus::Inactive => "INACTIVE",
        };
        write!(f, "{}", status)
    }
}
