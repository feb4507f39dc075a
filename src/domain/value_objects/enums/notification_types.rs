use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    SpotAvailable,
    Reminder,
    PlanExpiration,
    Cancellation,
    ReservationConfirmation,
    PlanActivated,
    PlanFrozen,
    PlanCanceled,
}

impl Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            NotificationType::SpotAvailable => "SPOT_AVAILABLE",
            NotificationType::Reminder => "REMINDER",
            NotificationType::PlanExpiration => "PLAN_EXPIRATION",
            NotificationType::Cancellation => "CANCELLATION",
            NotificationType::ReservationConfirmation => "RESERVATION_CONFIRMATION",
            NotificationType::PlanActivated => "PLAN_ACTIVATED",
            NotificationType::PlanFrozen => "PLAN_FROZEN",
            NotificationType::PlanCanceled => "PLAN_CANCELED",
        };
        write!(f, "{}", kind)
    }
}
