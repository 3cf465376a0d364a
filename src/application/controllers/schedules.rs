//! ScheduleController - turns plans into dated schedules.

use std::sync::Arc;

use crate::application::{ApiClient, SessionGuard};
use crate::domain::schedule::{
    CreateScheduleRequest, Schedule, ScheduleHistoryParams, ScheduleHistoryResponse,
};
use crate::domain::ApiResult;
use crate::ports::ApiRequest;

#[derive(Clone)]
pub struct ScheduleController {
    client: Arc<ApiClient>,
    guard: SessionGuard,
}

impl ScheduleController {
    pub fn new(client: Arc<ApiClient>, guard: SessionGuard) -> Self {
        Self { client, guard }
    }

    /// `POST /schedules`
    pub async fn create_schedule(&self, payload: &CreateScheduleRequest) -> ApiResult<Schedule> {
        let result = self
            .client
            .send(ApiRequest::post("/schedules").json(payload))
            .await;
        self.guard.guard(result)
    }

    /// `GET /schedules/history` - dates go out as `YYYY-MM-DD`.
    pub async fn get_schedule_history(
        &self,
        params: ScheduleHistoryParams,
    ) -> ApiResult<ScheduleHistoryResponse> {
        let request = ApiRequest::get("/schedules/history")
            .query_opt("from", params.from)
            .query_opt("to", params.to)
            .query_opt("page", params.page)
            .query_opt("size", params.size);
        let result = self.client.send(request).await;
        self.guard.guard(result)
    }
}
