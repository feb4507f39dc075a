use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::enums::instructor_statuses::InstructorStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstructorDto {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub specialties: Vec<String>,
    pub biography: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// Partial update applied over an existing instructor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstructorPatch {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialties: Option<Vec<String>>,
    pub biography: Option<String>,
    pub photo: Option<String>,
    pub status: Option<InstructorStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstructorDto {
    pub id: Uuid,
    #[serde(flatten)]
    pub patch: InstructorPatch,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstructorFilters {
    /// Case-insensitive substring over names, email and specialties.
    pub search: Option<String>,
    pub status: Option<InstructorStatus>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpecialtyCount {
    pub specialty: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstructorStatistics {
    pub total_instructors: usize,
    pub active_instructors: usize,
    pub inactive_instructors: usize,
    pub top_specialties: Vec<SpecialtyCount>,
}
