use chrono::{Duration, NaiveDateTime};

/// Every event booked from the dashboard runs for this long.
pub const EVENT_DURATION_HOURS: i64 = 2;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_datetime: NaiveDateTime,
    pub end_datetime: NaiveDateTime,
    pub organizer_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub start_datetime: NaiveDateTime,
    pub end_datetime: NaiveDateTime,
    pub organizer_id: Option<i64>,
}

impl NewEvent {
    /// Build an event starting at `start`; the end time is derived.
    pub fn starting_at(
        title: String,
        description: Option<String>,
        start: NaiveDateTime,
        organizer_id: Option<i64>,
    ) -> Self {
        Self {
            title,
            description,
            start_datetime: start,
            end_datetime: start + Duration::hours(EVENT_DURATION_HOURS),
            organizer_id,
        }
    }
}
