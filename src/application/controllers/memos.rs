//! MemoController - the user's private memo on a bar.

use std::sync::Arc;

use crate::application::{ApiClient, SessionGuard};
use crate::domain::foundation::BarId;
use crate::domain::memo::{Memo, UpsertMemoRequest};
use crate::domain::ApiResult;
use crate::ports::ApiRequest;

#[derive(Clone)]
pub struct MemoController {
    client: Arc<ApiClient>,
    guard: SessionGuard,
}

impl MemoController {
    pub fn new(client: Arc<ApiClient>, guard: SessionGuard) -> Self {
        Self { client, guard }
    }

    /// `GET /bars/{barId}/memo`
    pub async fn get_memo(&self, bar_id: BarId) -> ApiResult<Memo> {
        let result = self
            .client
            .send(ApiRequest::get(format!("/bars/{bar_id}/memo")))
            .await;
        self.guard.guard(result)
    }

    /// `PUT /bars/{barId}/memo` - creates the memo or replaces its content.
    pub async fn upsert_memo(&self, bar_id: BarId, payload: &UpsertMemoRequest) -> ApiResult<Memo> {
        let result = self
            .client
            .send(ApiRequest::put(format!("/bars/{bar_id}/memo")).json(payload))
            .await;
        self.guard.guard(result)
    }
}
