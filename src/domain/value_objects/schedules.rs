use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::plans::PlanType;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleDto {
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
    pub max_capacity: u32,
    pub instructor_id: Uuid,
    pub class_type: PlanType,
    pub room: String,
    pub description: String,
}

/// Partial update applied over an existing schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePatch {
    pub day_of_week: Option<u8>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub max_capacity: Option<u32>,
    pub instructor_id: Option<Uuid>,
    pub class_type: Option<PlanType>,
    pub room: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduleDto {
    pub id: Uuid,
    #[serde(flatten)]
    pub patch: SchedulePatch,
}
