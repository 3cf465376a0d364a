//! Review DTOs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::foundation::{ReviewId, UserId};

/// Body of `POST /bars/{barId}/reviews`. Rating is 1 to 5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub rating: u8,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_urls: Option<Vec<String>>,
}

/// Body of `PATCH /reviews/{reviewId}`. Rating is always sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewRequest {
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_urls: Option<Vec<String>>,
}

/// Body of `POST /reviews/{reviewId}/report`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportReviewRequest {
    pub reason: String,
}

/// Aggregate rating statistics for one bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub total_count: u64,
    /// 0.0 to 5.0
    pub average_rating: f64,
    /// Star value (1..=5) to number of reviews.
    #[serde(default)]
    pub rating_distribution: BTreeMap<u8, u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListItem {
    pub id: ReviewId,
    pub user_id: UserId,
    pub rating: u8,
    pub content: String,
    #[serde(default)]
    pub media_urls: Vec<String>,
    pub created_at: String,
}

/// Full review. Currently the same shape as a list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDetail {
    pub id: ReviewId,
    pub user_id: UserId,
    pub rating: u8,
    pub content: String,
    #[serde(default)]
    pub media_urls: Vec<String>,
    pub created_at: String,
}
