//! Query and form structures for the organizer dashboard.
//!
//! Every form field is optional on the wire: a missing field parses as empty
//! and is rejected by the dashboard operations with a flash message, never
//! with a 400.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::models::dashboard::{EventInput, ResourceInput, VenueInput};

#[derive(Debug, Default, Deserialize)]
pub struct SectionQuery {
    #[serde(alias = "Section")]
    pub section: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EventForm {
    pub csrf_token: String,
    pub event_name: String,
    pub event_date: String,
    pub event_description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VenueForm {
    pub csrf_token: String,
    pub venue_name: String,
    pub venue_details: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResourceForm {
    pub csrf_token: String,
    pub resource_type: String,
    pub quantity: String,
}

impl EventForm {
    pub fn into_input(self) -> EventInput {
        EventInput {
            date: parse_event_date(&self.event_date),
            name: self.event_name,
            description: optional_text(self.event_description),
        }
    }
}

impl VenueForm {
    pub fn into_input(self) -> VenueInput {
        VenueInput {
            name: self.venue_name,
            details: optional_text(self.venue_details),
        }
    }
}

impl ResourceForm {
    pub fn into_input(self) -> ResourceInput {
        ResourceInput {
            quantity: self.quantity.trim().parse().unwrap_or(0),
            resource_type: self.resource_type,
        }
    }
}

/// Accepts `YYYY-MM-DD` (midnight) or an HTML `datetime-local` value.
pub fn parse_event_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for fmt in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn optional_text(raw: String) -> Option<String> {
    if raw.trim().is_empty() { None } else { Some(raw) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_dates_at_midnight() {
        let dt = parse_event_date("2026-11-02").unwrap();
        assert_eq!(dt.to_string(), "2026-11-02 00:00:00");
    }

    #[test]
    fn parses_datetime_local_values() {
        let dt = parse_event_date(" 2026-11-02T18:45 ").unwrap();
        assert_eq!(dt.to_string(), "2026-11-02 18:45:00");
    }

    #[test]
    fn rejects_garbage_dates() {
        assert!(parse_event_date("").is_none());
        assert!(parse_event_date("tomorrow").is_none());
        assert!(parse_event_date("2026-02-30").is_none());
    }

    #[test]
    fn blank_description_becomes_none() {
        let form = EventForm {
            event_name: "Conf".into(),
            event_date: "2026-11-02".into(),
            event_description: "   ".into(),
            ..Default::default()
        };
        let input = form.into_input();
        assert_eq!(input.name, "Conf");
        assert!(input.description.is_none());
    }

    #[test]
    fn unparseable_quantity_counts_as_zero() {
        let form = ResourceForm {
            resource_type: "Chairs".into(),
            quantity: "ten".into(),
            ..Default::default()
        };
        assert_eq!(form.into_input().quantity, 0);

        let form = ResourceForm {
            resource_type: "Chairs".into(),
            quantity: " 10 ".into(),
            ..Default::default()
        };
        assert_eq!(form.into_input().quantity, 10);
    }

    #[test]
    fn section_query_accepts_either_casing() {
        let q: SectionQuery = serde_urlencoded::from_str("Section=MyBookings").unwrap();
        assert_eq!(q.section.as_deref(), Some("MyBookings"));
        let q: SectionQuery = serde_urlencoded::from_str("section=CreateEvent").unwrap();
        assert_eq!(q.section.as_deref(), Some("CreateEvent"));
    }
}
