use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::plans::PlanType;

/// A recurring weekly class slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: Uuid,
    /// 0-6, where 0 is Sunday.
    pub day_of_week: u8,
    /// HH:mm
    pub start_time: String,
    /// HH:mm
    pub end_time: String,
    pub max_capacity: u32,
    pub instructor_id: Uuid,
    pub class_type: PlanType,
    pub room: String,
    pub description: String,
}
