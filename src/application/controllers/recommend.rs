//! RecommendController - AI bar recommendations. Requires a session.

use std::sync::Arc;

use crate::application::{ApiClient, SessionGuard};
use crate::domain::recommend::{RecommendBarsRequest, RecommendedBar};
use crate::domain::ApiResult;
use crate::ports::ApiRequest;

#[derive(Clone)]
pub struct RecommendController {
    client: Arc<ApiClient>,
    guard: SessionGuard,
}

impl RecommendController {
    pub fn new(client: Arc<ApiClient>, guard: SessionGuard) -> Self {
        Self { client, guard }
    }

    /// `POST /ai/recommend-bars` - ranked bars for a free-text prompt around
    /// the given position.
    pub async fn recommend_bars(
        &self,
        payload: &RecommendBarsRequest,
    ) -> ApiResult<Vec<RecommendedBar>> {
        let result = self
            .client
            .send(ApiRequest::post("/ai/recommend-bars").json(payload))
            .await;
        self.guard.guard(result)
    }
}
