//! AI recommendation DTOs.

use serde::{Deserialize, Serialize};

use super::foundation::BarId;

/// Body of `POST /ai/recommend-bars`.
///
/// The backend expects `lat` in [-90, 90], `lon` in [-180, 180],
/// `max_distance` in meters (50 to 20000) and a non-blank prompt of at most
/// 300 characters; it reports violations as a 400.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendBarsRequest {
    pub lat: f64,
    pub lon: f64,
    pub max_distance: u32,
    pub user_prompt: String,
}

/// One recommended bar, ranked by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedBar {
    pub id: BarId,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub base_category_name: Option<String>,
    #[serde(default)]
    pub open_information: Option<String>,
    pub recommend_rank: u32,
    pub recommend_reason: String,
}
