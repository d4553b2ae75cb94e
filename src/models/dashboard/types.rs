use chrono::NaiveDateTime;

use crate::models::booking::BookingView;
use crate::models::venue::Venue;

pub const DASHBOARD_PATH: &str = "/organizer/dashboard";

/// Sub-view of the dashboard, selected by the `section` query parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Overview,
    CreateEvent,
    MyBookings,
    RequestVenue,
    RequestResources,
    /// Unrecognised selector; renders the page shell with no section data.
    Other(String),
}

impl Section {
    /// Sections listed in the dashboard navigation, in display order.
    pub const NAV: [Section; 5] = [
        Section::Overview,
        Section::CreateEvent,
        Section::RequestVenue,
        Section::RequestResources,
        Section::MyBookings,
    ];

    /// Parse a raw selector. Matching is exact; a missing selector means Overview.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("Overview") => Section::Overview,
            Some("CreateEvent") => Section::CreateEvent,
            Some("MyBookings") => Section::MyBookings,
            Some("RequestVenue") => Section::RequestVenue,
            Some("RequestResources") => Section::RequestResources,
            Some(other) => Section::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Section::Overview => "Overview",
            Section::CreateEvent => "CreateEvent",
            Section::MyBookings => "MyBookings",
            Section::RequestVenue => "RequestVenue",
            Section::RequestResources => "RequestResources",
            Section::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Section::Overview => "Overview",
            Section::CreateEvent => "Create Event",
            Section::MyBookings => "My Bookings",
            Section::RequestVenue => "Request Venue",
            Section::RequestResources => "Request Resources",
            Section::Other(raw) => raw,
        }
    }

    /// Dashboard URL for this section. `Other` maps to the bare dashboard path.
    pub fn url(&self) -> String {
        match self {
            Section::Other(_) => DASHBOARD_PATH.to_string(),
            known => format!("{}?section={}", DASHBOARD_PATH, known.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverviewCounts {
    pub total_events: i64,
    pub total_venues: i64,
    pub total_resources: i64,
    pub total_bookings: i64,
}

/// Data loaded for one section. Fields belonging to other sections stay `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionData {
    pub counts: Option<OverviewCounts>,
    pub available_venues: Option<Vec<Venue>>,
    pub my_bookings: Option<Vec<BookingView>>,
}

impl SectionData {
    pub fn is_empty(&self) -> bool {
        self.counts.is_none() && self.available_venues.is_none() && self.my_bookings.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventInput {
    pub name: String,
    /// `None` when the submitted date was missing or unparseable.
    pub date: Option<NaiveDateTime>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VenueInput {
    pub name: String,
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceInput {
    pub resource_type: String,
    pub quantity: i32,
}

/// Result of a dashboard form submission. Either way the caller redirects
/// back to the originating section and shows the message once.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Created { id: i64, message: String },
    Rejected { message: String },
}

impl Submission {
    pub fn message(&self) -> &str {
        match self {
            Submission::Created { message, .. } | Submission::Rejected { message } => message,
        }
    }

    pub fn created_id(&self) -> Option<i64> {
        match self {
            Submission::Created { id, .. } => Some(*id),
            Submission::Rejected { .. } => None,
        }
    }
}
