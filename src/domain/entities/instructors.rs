use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::enums::instructor_statuses::InstructorStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    pub id: Uuid,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Never empty.
    pub specialties: Vec<String>,
    pub biography: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub status: InstructorStatus,
}
