use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::enums::student_plan_statuses::StudentPlanStatus;

/// Assignment of a plan to a student, with its own lifecycle independent of
/// the plan definition. At most one per student may be `Active` at a time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentPlan {
    pub id: Uuid,
    pub student_id: Uuid,
    pub plan_id: Uuid,
    pub start_date: DateTime<Utc>,
    /// start_date + plan duration, extended by freeze periods.
    pub end_date: DateTime<Utc>,
    pub remaining_classes: i32,
    pub status: StudentPlanStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_cancellation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frozen_periods: Option<Vec<FrozenPeriod>>,
}

/// A date range during which class consumption is paused.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrozenPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
