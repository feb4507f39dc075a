use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::student_plans::FrozenPeriod;
use crate::domain::value_objects::enums::student_plan_statuses::StudentPlanStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivatePlanDto {
    pub student_id: Uuid,
    pub plan_id: Uuid,
    pub start_date: DateTime<Utc>,
    /// Overrides the plan's included class count when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_classes: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FreezePlanDto {
    pub student_plan_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CancelPlanDto {
    pub student_plan_id: Uuid,
    pub reason: String,
}

/// Store-level input for a new assignment; the id is assigned on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudentPlan {
    pub student_id: Uuid,
    pub plan_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub remaining_classes: i32,
    pub status: StudentPlanStatus,
}

/// Partial update applied over an existing student plan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentPlanPatch {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub remaining_classes: Option<i32>,
    pub status: Option<StudentPlanStatus>,
    pub reason_cancellation: Option<String>,
    pub frozen_periods: Option<Vec<FrozenPeriod>>,
}
