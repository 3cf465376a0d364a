//! Resource controllers - one per backend resource.
//!
//! Every method builds the path and payload from typed inputs, sends it
//! through the shared [`ApiClient`], and returns the [`crate::domain::ApiResult`]
//! as-is. Controllers for authenticated resources run the result through the
//! [`SessionGuard`] first. Nothing is validated client-side; the backend's
//! answer is authoritative.

mod auth;
mod bars;
mod calendar;
mod memos;
mod plans;
mod recommend;
mod reviews;
mod schedules;

pub use auth::AuthController;
pub use bars::BarController;
pub use calendar::CalendarController;
pub use memos::MemoController;
pub use plans::PlanController;
pub use recommend::RecommendController;
pub use reviews::ReviewController;
pub use schedules::ScheduleController;

use std::sync::Arc;

use super::{ApiClient, SessionGuard};

/// All controllers wired to one client and one guard.
#[derive(Clone)]
pub struct Controllers {
    pub auth: AuthController,
    pub bars: BarController,
    pub recommend: RecommendController,
    pub memos: MemoController,
    pub reviews: ReviewController,
    pub plans: PlanController,
    pub schedules: ScheduleController,
    pub calendar: CalendarController,
}

impl Controllers {
    pub fn new(client: Arc<ApiClient>, guard: SessionGuard) -> Self {
        Self {
            auth: AuthController::new(client.clone(), guard.clone()),
            bars: BarController::new(client.clone()),
            recommend: RecommendController::new(client.clone(), guard.clone()),
            memos: MemoController::new(client.clone(), guard.clone()),
            reviews: ReviewController::new(client.clone(), guard.clone()),
            plans: PlanController::new(client.clone(), guard.clone()),
            schedules: ScheduleController::new(client.clone(), guard.clone()),
            calendar: CalendarController::new(client, guard),
        }
    }
}
