//! Schedule DTOs. A schedule pins a plan to a concrete time slot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::foundation::{Page, PlanId, ScheduleId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: ScheduleId,
    pub plan_id: PlanId,
    pub title: String,
    #[serde(default, rename = "type")]
    pub schedule_type: Option<String>,
    /// ISO 8601 date-time.
    pub start_at: String,
    /// ISO 8601 date-time.
    pub end_at: String,
    #[serde(default)]
    pub reminders: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /schedules`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    pub plan_id: PlanId,
    pub title: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schedule_type: Option<String>,
    pub start_at: String,
    pub end_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminders: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleHistoryItem {
    pub id: ScheduleId,
    #[serde(default)]
    pub plan_id: Option<PlanId>,
    pub title: String,
    pub start_at: String,
    pub end_at: String,
}

pub type ScheduleHistoryResponse = Page<ScheduleHistoryItem>;

/// Query for `GET /schedules/history`. Dates are inclusive and sent as
/// `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleHistoryParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl ScheduleHistoryParams {
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            ..Self::default()
        }
    }
}
