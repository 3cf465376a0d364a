//! Calendar views over scheduled outings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::foundation::{PlanId, ScheduleId};
use super::plan::PlanSpot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub schedule_id: ScheduleId,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub start_at: Option<String>,
    #[serde(default)]
    pub end_at: Option<String>,
    #[serde(default, rename = "type")]
    pub event_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCalendar {
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
}

impl MonthlyCalendar {
    /// Events falling on `date`, in response order.
    pub fn events_on(&self, date: NaiveDate) -> impl Iterator<Item = &CalendarEvent> {
        self.events.iter().filter(move |event| event.date == date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCalendar {
    pub date: NaiveDate,
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    pub schedule_id: ScheduleId,
    #[serde(default)]
    pub plan_id: Option<PlanId>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_at: String,
    pub end_at: String,
    #[serde(default, rename = "type")]
    pub event_type: Option<String>,
    #[serde(default)]
    pub spots: Vec<PlanSpot>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn monthly_calendar_filters_by_day() {
        let calendar: MonthlyCalendar = serde_json::from_value(json!({
            "year": 2025,
            "month": 3,
            "events": [
                { "scheduleId": 1, "title": "A", "date": "2025-03-07" },
                { "scheduleId": 2, "title": "B", "date": "2025-03-14", "type": "SOLO" },
                { "scheduleId": 3, "title": "C", "date": "2025-03-07" }
            ]
        }))
        .unwrap();

        let friday = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        let ids: Vec<i64> = calendar
            .events_on(friday)
            .map(|e| e.schedule_id.value())
            .collect();

        assert_eq!(ids, vec![1, 3]);
        assert_eq!(calendar.events[1].event_type.as_deref(), Some("SOLO"));
    }

    #[test]
    fn event_detail_spots_default_to_empty() {
        let detail: EventDetail = serde_json::from_value(json!({
            "scheduleId": 4,
            "title": "Crawl",
            "startAt": "2025-03-07T19:00:00",
            "endAt": "2025-03-07T23:00:00"
        }))
        .unwrap();

        assert!(detail.spots.is_empty());
        assert!(detail.plan_id.is_none());
    }
}
