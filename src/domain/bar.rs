//! Bar (venue) DTOs.

use serde::{Deserialize, Serialize};

use super::foundation::BarId;

/// Ordering for nearby-bar search. `Unspecified` serializes as `""`, which the
/// backend treats like an absent sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarSort {
    Distance,
    Recommended,
    Rating,
    #[default]
    #[serde(rename = "")]
    Unspecified,
}

/// Body of `POST /bars/nearby`.
///
/// Coordinates are WGS84. The backend accepts `count` between 1 and 50.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindNearbyBarsRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: u32,
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<BarSort>,
}

impl FindNearbyBarsRequest {
    pub fn new(latitude: f64, longitude: f64, radius_meters: u32, count: u32) -> Self {
        Self {
            latitude,
            longitude,
            radius_meters,
            count,
            keyword: None,
            category: None,
            sort: None,
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_sort(mut self, sort: BarSort) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// One entry of a nearby search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarListItem {
    pub id: BarId,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub base_category_name: String,
    pub open_information: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

/// Response of `GET /bars/{barId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDetail {
    pub id: BarId,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub base_category_name: String,
    #[serde(default)]
    pub menus: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub open_information: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nearby_request_serializes_camel_case_and_skips_absent_filters() {
        let body = serde_json::to_value(
            FindNearbyBarsRequest::new(37.5665, 126.978, 500, 20).with_sort(BarSort::Rating),
        )
        .unwrap();

        assert_eq!(
            body,
            json!({
                "latitude": 37.5665,
                "longitude": 126.978,
                "radiusMeters": 500,
                "count": 20,
                "sort": "rating"
            })
        );
    }

    #[test]
    fn unspecified_sort_is_empty_string() {
        assert_eq!(serde_json::to_value(BarSort::Unspecified).unwrap(), json!(""));
        let sort: BarSort = serde_json::from_value(json!("")).unwrap();
        assert_eq!(sort, BarSort::Unspecified);
    }

    #[test]
    fn detail_defaults_missing_lists() {
        let detail: BarDetail = serde_json::from_value(json!({
            "id": 42,
            "name": "Bar X",
            "address": "Seoul",
            "latitude": 37.5,
            "longitude": 127.0,
            "baseCategoryName": "pub",
            "openInformation": "18:00-02:00",
            "createdAt": "2025-01-01T00:00:00",
            "updatedAt": "2025-01-01T00:00:00",
            "deletedAt": null
        }))
        .unwrap();

        assert_eq!(detail.id, BarId::new(42));
        assert!(detail.menus.is_empty());
        assert!(detail.categories.is_empty());
        assert!(detail.deleted_at.is_none());
    }
}
