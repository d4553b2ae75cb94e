use chrono::NaiveDate;

use super::types::{
    EventInput, OverviewCounts, ResourceInput, Section, SectionData, Submission, VenueInput,
};
use crate::errors::AppError;
use crate::models::STATUS_APPROVED;
use crate::models::booking::{BookingView, derive_display_status};
use crate::models::event::NewEvent;
use crate::models::resource::NewResource;
use crate::models::venue::{NewVenue, Venue};
use crate::store::DashboardStore;

pub const MSG_EVENT_DATE_PAST: &str = "Event date cannot be in the past.";
pub const MSG_EVENT_DATE_INVALID: &str = "Please enter a valid event date.";
pub const MSG_EVENT_NAME_MISSING: &str = "Please enter an event name.";
pub const MSG_VENUE_NAME_MISSING: &str = "Venue name is required.";
pub const MSG_RESOURCE_INVALID: &str = "Please provide valid resource and quantity.";

fn rejected(message: &str) -> Submission {
    log::debug!("Dashboard submission rejected: {message}");
    Submission::Rejected {
        message: message.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Read side
// ---------------------------------------------------------------------------

pub async fn get_overview_counts(store: &dyn DashboardStore) -> Result<OverviewCounts, AppError> {
    Ok(OverviewCounts {
        total_events: store.count_events().await?,
        total_venues: store.count_venues().await?,
        total_resources: store.count_resources().await?,
        total_bookings: store.count_bookings().await?,
    })
}

/// Venues an organizer may pick when creating an event.
pub async fn get_approved_venues(store: &dyn DashboardStore) -> Result<Vec<Venue>, AppError> {
    store.venues_with_status(STATUS_APPROVED).await
}

/// Joined booking rows, newest first, with past bookings shown as Completed.
pub async fn list_my_bookings(
    store: &dyn DashboardStore,
    today: NaiveDate,
) -> Result<Vec<BookingView>, AppError> {
    let rows = store.booking_rows().await?;
    Ok(derive_display_status(rows, today))
}

pub async fn load_section(
    store: &dyn DashboardStore,
    section: &Section,
    today: NaiveDate,
) -> Result<SectionData, AppError> {
    let mut data = SectionData::default();
    match section {
        Section::Overview => data.counts = Some(get_overview_counts(store).await?),
        Section::CreateEvent => data.available_venues = Some(get_approved_venues(store).await?),
        Section::MyBookings => data.my_bookings = Some(list_my_bookings(store, today).await?),
        Section::RequestVenue | Section::RequestResources | Section::Other(_) => {}
    }
    Ok(data)
}

// ---------------------------------------------------------------------------
// Submissions
// ---------------------------------------------------------------------------

/// Pick the organizer for a new event.
///
/// The signed-in user wins. Without one, the first user on record is used.
pub async fn resolve_organizer(
    store: &dyn DashboardStore,
    session_user: Option<i64>,
) -> Result<Option<i64>, AppError> {
    if let Some(user_id) = session_user {
        return Ok(Some(user_id));
    }
    let fallback = store.first_user_id().await?;
    log::warn!("No signed-in user for event creation, falling back to first user {fallback:?}");
    Ok(fallback)
}

pub async fn create_event(
    store: &dyn DashboardStore,
    input: EventInput,
    organizer_id: Option<i64>,
    today: NaiveDate,
) -> Result<Submission, AppError> {
    let Some(start) = input.date else {
        return Ok(rejected(MSG_EVENT_DATE_INVALID));
    };
    if start.date() < today {
        return Ok(rejected(MSG_EVENT_DATE_PAST));
    }
    if input.name.trim().is_empty() {
        return Ok(rejected(MSG_EVENT_NAME_MISSING));
    }

    let event = NewEvent::starting_at(input.name, input.description, start, organizer_id);
    let id = store.insert_event(&event).await?;
    log::info!(
        "Event {} '{}' created for {} (organizer {:?})",
        id,
        event.title,
        event.start_datetime,
        event.organizer_id
    );

    Ok(Submission::Created {
        id,
        message: format!("Event '{}' created successfully!", event.title),
    })
}

pub async fn request_venue(
    store: &dyn DashboardStore,
    input: VenueInput,
) -> Result<Submission, AppError> {
    if input.name.trim().is_empty() {
        return Ok(rejected(MSG_VENUE_NAME_MISSING));
    }

    let venue = NewVenue::requested(input.name, input.details);
    let id = store.insert_venue(&venue).await?;
    log::info!("Venue request {} '{}' submitted", id, venue.name);

    Ok(Submission::Created {
        id,
        message: format!("Venue '{}' request submitted!", venue.name),
    })
}

pub async fn request_resources(
    store: &dyn DashboardStore,
    input: ResourceInput,
) -> Result<Submission, AppError> {
    if input.resource_type.trim().is_empty() || input.quantity <= 0 {
        return Ok(rejected(MSG_RESOURCE_INVALID));
    }

    let resource = NewResource::requested(input.resource_type, input.quantity);
    let id = store.insert_resource(&resource).await?;
    log::info!(
        "Resource request {} submitted: {} x {}",
        id,
        resource.quantity,
        resource.resource_type
    );

    Ok(Submission::Created {
        id,
        message: format!("Resource request for '{}' submitted!", resource.resource_type),
    })
}
