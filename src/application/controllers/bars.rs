//! BarController - nearby search and bar details. Public endpoints.

use std::sync::Arc;

use crate::application::ApiClient;
use crate::domain::bar::{BarDetail, BarListItem, FindNearbyBarsRequest};
use crate::domain::foundation::BarId;
use crate::domain::ApiResult;
use crate::ports::ApiRequest;

#[derive(Clone)]
pub struct BarController {
    client: Arc<ApiClient>,
}

impl BarController {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /bars/nearby` - bars within a radius of a point.
    pub async fn nearby(&self, payload: &FindNearbyBarsRequest) -> ApiResult<Vec<BarListItem>> {
        self.client
            .send(ApiRequest::post("/bars/nearby").json(payload))
            .await
    }

    /// `GET /bars/{barId}`
    pub async fn find_bar_by_id(&self, bar_id: BarId) -> ApiResult<BarDetail> {
        self.client
            .send(ApiRequest::get(format!("/bars/{bar_id}")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::MockTransport;
    use crate::application::controllers::test_support::wire;
    use crate::domain::bar::BarSort;
    use crate::ports::TransportError;
    use serde_json::json;

    fn bar_json(id: i64, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "address": "서울 마포구",
            "latitude": 37.55,
            "longitude": 126.92,
            "baseCategoryName": "호프",
            "menus": ["생맥주"],
            "categories": ["pub"],
            "openInformation": "18:00-02:00",
            "createdAt": "2025-01-01T00:00:00",
            "updatedAt": "2025-01-02T00:00:00",
            "deletedAt": null
        })
    }

    #[tokio::test]
    async fn find_bar_by_id_returns_detail() {
        let transport = MockTransport::new().with_json(200, bar_json(42, "Bar X"));
        let (client, _, _) = wire(&transport);
        let controller = BarController::new(client);

        let result = controller.find_bar_by_id(BarId::new(42)).await;

        assert_eq!(result.status(), 200);
        let bar = result.data().unwrap();
        assert_eq!(bar.id, BarId::new(42));
        assert_eq!(bar.name, "Bar X");
        assert_eq!(bar.menus, vec!["생맥주"]);
        assert_eq!(transport.last_call().unwrap().path, "/bars/42");
    }

    #[tokio::test]
    async fn nearby_posts_search_and_decodes_list() {
        let mut item = bar_json(1, "A");
        item.as_object_mut().unwrap().remove("menus");
        let transport = MockTransport::new().with_json(200, json!([item]));
        let (client, _, _) = wire(&transport);
        let controller = BarController::new(client);

        let request = FindNearbyBarsRequest::new(37.55, 126.92, 300, 10)
            .with_keyword("맥주")
            .with_sort(BarSort::Distance);
        let result = controller.nearby(&request).await;

        assert_eq!(result.data().map(Vec::len), Some(1));
        let call = transport.last_call().unwrap();
        assert_eq!(call.path, "/bars/nearby");
        let body = call.json_body().unwrap().unwrap();
        assert_eq!(body["radiusMeters"], 300);
        assert_eq!(body["keyword"], "맥주");
        assert_eq!(body["sort"], "distance");
    }

    #[tokio::test]
    async fn unreachable_backend_is_status_zero() {
        let transport =
            MockTransport::new().with_error(TransportError::Connect("connection refused".to_string()));
        let (client, _, navigator) = wire(&transport);
        let controller = BarController::new(client);

        let result = controller.find_bar_by_id(BarId::new(1)).await;

        assert_eq!(result.status(), 0);
        assert_eq!(result.error().unwrap().message, "서버에 연결할 수 없습니다.");
        assert_eq!(navigator.navigation_count(), 0);
    }
}
