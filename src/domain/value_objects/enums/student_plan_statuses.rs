use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Lifecycle of a plan assigned to a student.
///
/// `PendingPayment` and `Paid` exist in the model but no operation moves a
/// plan through them yet; assignments are created directly as `Active`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudentPlanStatus {
    PendingPayment,
    Paid,
    Active,
    Frozen,
    Canceled,
    Expired,
}

impl Display for StudentPlanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            StudentPlanStatus::PendingPayment => "PENDING_PAYMENT",
            StudentPlanStatus::Paid => "PAID",
            StudentPlanStatus::Active => "ACTIVE",
            StudentPlanStatus::Frozen => "FROZEN",
            StudentPlanStatus::Canceled => "CANCELED",
            StudentPlanStatus::Expired => "EXPIRED",
        };
        write!(f, "{}", status)
    }
}
