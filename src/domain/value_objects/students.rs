use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::{reservations::Reservation, student_plans::StudentPlan, students::Student},
    value_objects::enums::student_statuses::StudentStatus,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
}

/// Partial update applied over an existing student.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub status: Option<StudentStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentDto {
    pub id: Uuid,
    #[serde(flatten)]
    pub patch: StudentPatch,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentFilters {
    /// Case-insensitive substring over first name, last name and email.
    pub search: Option<String>,
    pub plan_id: Option<Uuid>,
    pub status: Option<StudentStatus>,
}

/// Student enriched with their active plan and upcoming reservations.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailedStudent {
    #[serde(flatten)]
    pub student: Student,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_plan: Option<StudentPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upcoming_reservations: Option<Vec<Reservation>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentStatistics {
    pub total_students: usize,
    pub active_students: usize,
    pub inactive_students: usize,
    pub students_with_active_plans: usize,
    pub students_without_plans: usize,
}

/// A plan together with how many students are enrolled in it.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanEnrollment {
    pub id: Uuid,
    pub name: String,
    pub students_count: usize,
}
