//! PlanController - outing plans and votes.

use std::sync::Arc;

use crate::application::{ApiClient, SessionGuard};
use crate::domain::foundation::{ListParams, PlanId};
use crate::domain::plan::{CreatePlanRequest, Plan, PlanListResponse, UpdatePlanRequest, VoteRequest};
use crate::domain::ApiResult;
use crate::ports::ApiRequest;

#[derive(Clone)]
pub struct PlanController {
    client: Arc<ApiClient>,
    guard: SessionGuard,
}

impl PlanController {
    pub fn new(client: Arc<ApiClient>, guard: SessionGuard) -> Self {
        Self { client, guard }
    }

    /// `POST /plans`
    pub async fn create_plan(&self, payload: &CreatePlanRequest) -> ApiResult<Plan> {
        let result = self
            .client
            .send(ApiRequest::post("/plans").json(payload))
            .await;
        self.guard.guard(result)
    }

    /// `GET /plans/{planId}`
    pub async fn get_plan_detail(&self, plan_id: PlanId) -> ApiResult<Plan> {
        let result = self
            .client
            .send(ApiRequest::get(format!("/plans/{plan_id}")))
            .await;
        self.guard.guard(result)
    }

    /// `PATCH /plans/{planId}` - only the fields set in `payload` change.
    pub async fn update_plan(&self, plan_id: PlanId, payload: &UpdatePlanRequest) -> ApiResult<Plan> {
        let result = self
            .client
            .send(ApiRequest::patch(format!("/plans/{plan_id}")).json(payload))
            .await;
        self.guard.guard(result)
    }

    /// `DELETE /plans/{planId}`
    pub async fn delete_plan(&self, plan_id: PlanId) -> ApiResult<()> {
        let result = self
            .client
            .send_unit(ApiRequest::delete(format!("/plans/{plan_id}")))
            .await;
        self.guard.guard(result)
    }

    /// `GET /plans`
    pub async fn list_plans(&self, params: &ListParams) -> ApiResult<PlanListResponse> {
        let request = ApiRequest::get("/plans")
            .query_opt("sort", params.sort.as_deref())
            .query_opt("page", params.page)
            .query_opt("size", params.size);
        let result = self.client.send(request).await;
        self.guard.guard(result)
    }

    /// `POST /plans/{planId}/votes`
    pub async fn vote_plan(&self, plan_id: PlanId, payload: VoteRequest) -> ApiResult<()> {
        let result = self
            .client
            .send_unit(ApiRequest::post(format!("/plans/{plan_id}/votes")).json(&payload))
            .await;
        self.guard.guard(result)
    }
}
