use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::plans::PlanType,
    value_objects::enums::{plan_formats::PlanFormat, plan_statuses::PlanStatus},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanDto {
    pub name: String,
    #[serde(rename = "type")]
    pub plan_types: Vec<PlanType>,
    pub description: String,
    pub duration_days: i64,
    pub included_classes: i32,
    pub price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanTypeDto {
    pub name: String,
    pub format: PlanFormat,
}

/// Partial update applied over an existing plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub plan_types: Option<Vec<PlanType>>,
    pub description: Option<String>,
    pub duration_days: Option<i64>,
    pub included_classes: Option<i32>,
    pub price: Option<i64>,
    pub status: Option<PlanStatus>,
    pub documents: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlanDto {
    pub id: Uuid,
    #[serde(flatten)]
    pub patch: PlanPatch,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanFilters {
    /// Case-insensitive substring over name and description.
    pub search: Option<String>,
    pub status: Option<PlanStatus>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanStatistics {
    pub total_plans: usize,
    pub active_plans: usize,
    pub total_assignments: usize,
    pub active_assignments: usize,
    pub estimated_revenue: i64,
}
