//! ReviewController - bar reviews, summaries, and reports.

use std::sync::Arc;

use crate::application::{ApiClient, SessionGuard};
use crate::domain::foundation::{BarId, ListParams, PageParams, ReviewId};
use crate::domain::review::{
    CreateReviewRequest, ReportReviewRequest, ReviewDetail, ReviewListItem, ReviewSummary,
    UpdateReviewRequest,
};
use crate::domain::ApiResult;
use crate::ports::ApiRequest;

#[derive(Clone)]
pub struct ReviewController {
    client: Arc<ApiClient>,
    guard: SessionGuard,
}

impl ReviewController {
    pub fn new(client: Arc<ApiClient>, guard: SessionGuard) -> Self {
        Self { client, guard }
    }

    /// `GET /bars/{barId}/reviews/summary`
    pub async fn get_review_summary(&self, bar_id: BarId) -> ApiResult<ReviewSummary> {
        let result = self
            .client
            .send(ApiRequest::get(format!("/bars/{bar_id}/reviews/summary")))
            .await;
        self.guard.guard(result)
    }

    /// `GET /bars/{barId}/reviews` - absent params are omitted from the query.
    pub async fn list_reviews(
        &self,
        bar_id: BarId,
        params: &ListParams,
    ) -> ApiResult<Vec<ReviewListItem>> {
        let request = ApiRequest::get(format!("/bars/{bar_id}/reviews"))
            .query_opt("sort", params.sort.as_deref())
            .query_opt("page", params.page)
            .query_opt("size", params.size);
        let result = self.client.send(request).await;
        self.guard.guard(result)
    }

    /// `GET /reviews/{reviewId}`
    pub async fn get_review_detail(&self, review_id: ReviewId) -> ApiResult<ReviewDetail> {
        let result = self
            .client
            .send(ApiRequest::get(format!("/reviews/{review_id}")))
            .await;
        self.guard.guard(result)
    }

    /// `POST /bars/{barId}/reviews`
    pub async fn create_review(
        &self,
        bar_id: BarId,
        payload: &CreateReviewRequest,
    ) -> ApiResult<ReviewDetail> {
        let result = self
            .client
            .send(ApiRequest::post(format!("/bars/{bar_id}/reviews")).json(payload))
            .await;
        self.guard.guard(result)
    }

    /// `PATCH /reviews/{reviewId}`
    pub async fn update_review(
        &self,
        review_id: ReviewId,
        payload: &UpdateReviewRequest,
    ) -> ApiResult<ReviewDetail> {
        let result = self
            .client
            .send(ApiRequest::patch(format!("/reviews/{review_id}")).json(payload))
            .await;
        self.guard.guard(result)
    }

    /// `DELETE /reviews/{reviewId}`
    pub async fn delete_review(&self, review_id: ReviewId) -> ApiResult<()> {
        let result = self
            .client
            .send_unit(ApiRequest::delete(format!("/reviews/{review_id}")))
            .await;
        self.guard.guard(result)
    }

    /// `GET /users/me/reviews`
    pub async fn list_my_reviews(&self, params: PageParams) -> ApiResult<Vec<ReviewListItem>> {
        let request = ApiRequest::get("/users/me/reviews")
            .query_opt("page", params.page)
            .query_opt("size", params.size);
        let result = self.client.send(request).await;
        self.guard.guard(result)
    }

    /// `POST /reviews/{reviewId}/report`
    pub async fn report_review(
        &self,
        review_id: ReviewId,
        payload: &ReportReviewRequest,
    ) -> ApiResult<()> {
        let result = self
            .client
            .send_unit(ApiRequest::post(format!("/reviews/{review_id}/report")).json(payload))
            .await;
        self.guard.guard(result)
    }
}
