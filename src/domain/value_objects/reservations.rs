use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::enums::reservation_statuses::ReservationStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationDto {
    pub student_id: Uuid,
    pub schedule_id: Uuid,
    pub date: DateTime<Utc>,
}

/// Partial update applied over an existing reservation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationPatch {
    pub date: Option<DateTime<Utc>>,
    pub status: Option<ReservationStatus>,
    pub cancellation_date: Option<DateTime<Utc>>,
}

/// Open-capacity summary for one schedule occurrence.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleAvailability {
    pub schedule_id: Uuid,
    pub date: DateTime<Utc>,
    pub available_slots: u32,
    pub max_capacity: u32,
    pub is_available: bool,
}
