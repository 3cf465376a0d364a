//! CalendarController - month, day, and single-event views over schedules.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::{ApiClient, SessionGuard};
use crate::domain::calendar::{DailyCalendar, EventDetail, MonthlyCalendar};
use crate::domain::foundation::ScheduleId;
use crate::domain::ApiResult;
use crate::ports::ApiRequest;

#[derive(Clone)]
pub struct CalendarController {
    client: Arc<ApiClient>,
    guard: SessionGuard,
}

impl CalendarController {
    pub fn new(client: Arc<ApiClient>, guard: SessionGuard) -> Self {
        Self { client, guard }
    }

    /// `GET /calendar/monthly?year&month`
    pub async fn get_monthly_calendar(&self, year: i32, month: u32) -> ApiResult<MonthlyCalendar> {
        let request = ApiRequest::get("/calendar/monthly")
            .query("year", year)
            .query("month", month);
        let result = self.client.send(request).await;
        self.guard.guard(result)
    }

    /// `GET /calendar/daily?date`
    pub async fn get_daily_calendar(&self, date: NaiveDate) -> ApiResult<DailyCalendar> {
        let request = ApiRequest::get("/calendar/daily").query("date", date);
        let result = self.client.send(request).await;
        self.guard.guard(result)
    }

    /// `GET /calendar/events/{scheduleId}`
    pub async fn get_event_detail(&self, schedule_id: ScheduleId) -> ApiResult<EventDetail> {
        let result = self
            .client
            .send(ApiRequest::get(format!("/calendar/events/{schedule_id}")))
            .await;
        self.guard.guard(result)
    }
}
