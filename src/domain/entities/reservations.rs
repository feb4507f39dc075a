use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::enums::reservation_statuses::ReservationStatus;

/// A booking of a student into a schedule occurrence on a calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: Uuid,
    pub student_id: Uuid,
    pub schedule_id: Uuid,
    /// The class date; capacity checks compare the calendar day only.
    pub date: DateTime<Utc>,
    pub status: ReservationStatus,
    pub reservation_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_date: Option<DateTime<Utc>>,
}
