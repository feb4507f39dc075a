use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::enums::student_statuses::StudentStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Unique among all students, case-insensitive.
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub registration_date: DateTime<Utc>,
    pub status: StudentStatus,
}
