use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::enums::{plan_formats::PlanFormat, plan_statuses::PlanStatus};

/// Sentinel class count meaning the plan has no class limit.
pub const UNLIMITED_CLASSES: i32 = 999;

/// A purchasable training offering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: Uuid,
    /// Unique among all plans, case-insensitive.
    pub name: String,
    #[serde(rename = "type")]
    pub plan_types: Vec<PlanType>,
    pub description: String,
    pub duration_days: i64,
    pub included_classes: i32,
    pub price: i64,
    pub status: PlanStatus,
    pub creation_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl Plan {
    pub fn is_unlimited(&self) -> bool {
        self.included_classes >= UNLIMITED_CLASSES
    }
}

/// A class discipline offered by the box (CROSSFIT, ZUMBA, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanType {
    pub id: Uuid,
    pub name: String,
    pub format: PlanFormat,
}
