use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Training delivery format of a plan type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanFormat {
    Online,
    InPerson,
}

impl Display for PlanFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let format = match self {
            PlanFormat::Online => "ONLINE",
            PlanFormat::InPerson => "IN_PERSON",
        };
        write!(f, "{}", format)
    }
}
