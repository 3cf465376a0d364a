//! Outing plan DTOs.
//!
//! Plans went through two wire shapes: an early one keyed by `id` with
//! `spots[].id`, and the current one keyed by `planId` with
//! `spots[].placeId`. The current shape is modelled here; the aliases keep
//! responses in the early shape decodable.

use serde::{Deserialize, Serialize};

use super::foundation::{Page, PlanId};

/// A stop within a plan, in visiting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSpot {
    /// Referenced place (usually a bar id); absent for free-form stops.
    #[serde(default, alias = "id", skip_serializing_if = "Option::is_none")]
    pub place_id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl PlanSpot {
    pub fn new(name: impl Into<String>, order: u32) -> Self {
        Self {
            place_id: None,
            name: name.into(),
            address: None,
            order,
            latitude: None,
            longitude: None,
            memo: None,
        }
    }

    pub fn at_place(mut self, place_id: i64) -> Self {
        self.place_id = Some(place_id);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    #[serde(alias = "id")]
    pub plan_id: PlanId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub budget: Option<u64>,
    #[serde(default)]
    pub spots: Vec<PlanSpot>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub vote_count: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body of `POST /plans`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<u64>,
    pub spots: Vec<PlanSpot>,
}

/// Body of `PATCH /plans/{planId}`; only present fields change.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlanRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spots: Option<Vec<PlanSpot>>,
}

/// Body of `POST /plans/{planId}/votes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteRequest {
    pub vote: bool,
}

pub type PlanListResponse = Page<Plan>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_current_shape() {
        let plan: Plan = serde_json::from_value(json!({
            "planId": 8,
            "title": "금요일 2차",
            "spots": [
                { "placeId": 42, "name": "Bar X", "order": 1 },
                { "name": "편의점", "order": 2 }
            ],
            "voteCount": 3
        }))
        .unwrap();

        assert_eq!(plan.plan_id, PlanId::new(8));
        assert_eq!(plan.spots[0].place_id, Some(42));
        assert_eq!(plan.spots[1].place_id, None);
        assert_eq!(plan.vote_count, Some(3));
    }

    #[test]
    fn decodes_early_shape_through_aliases() {
        let plan: Plan = serde_json::from_value(json!({
            "id": 2,
            "title": "Birthday",
            "spots": [{ "id": 11, "name": "Pub", "order": 1 }]
        }))
        .unwrap();

        assert_eq!(plan.plan_id, PlanId::new(2));
        assert_eq!(plan.spots[0].place_id, Some(11));
        assert!(plan.description.is_none());
    }

    #[test]
    fn create_request_serializes_spots_without_empty_fields() {
        let body = serde_json::to_value(CreatePlanRequest {
            title: "Crawl".to_string(),
            description: None,
            theme: Some("beer".to_string()),
            budget: Some(50_000),
            spots: vec![PlanSpot::new("Bar X", 1).at_place(42)],
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "title": "Crawl",
                "theme": "beer",
                "budget": 50000,
                "spots": [{ "placeId": 42, "name": "Bar X", "order": 1 }]
            })
        );
    }

    #[test]
    fn empty_update_is_empty_object() {
        let body = serde_json::to_value(UpdatePlanRequest::default()).unwrap();
        assert_eq!(body, json!({}));
    }
}
