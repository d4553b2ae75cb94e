//! Dashboard form submissions.
//!
//! Each handler checks CSRF, hands the parsed form to the matching dashboard
//! operation, then redirects back to its section with the outcome as a
//! one-shot flash message.

use actix_session::Session;
use actix_web::{HttpResponse, http::header, web};
use chrono::Local;

use crate::auth::csrf;
use crate::auth::session::{get_user_id, set_flash};
use crate::errors::AppError;
use crate::models::dashboard::{self, Section, Submission};
use crate::store::DashboardStore;

use super::forms::{EventForm, ResourceForm, VenueForm};

fn redirect_with_flash(session: &Session, section: Section, outcome: &Submission) -> HttpResponse {
    set_flash(session, outcome.message());
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, section.url()))
        .finish()
}

/// POST /organizer/dashboard/events
pub async fn create_event(
    store: web::Data<dyn DashboardStore>,
    session: Session,
    form: web::Form<EventForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let today = Local::now().date_naive();
    let input = form.into_inner().into_input();
    let organizer = dashboard::resolve_organizer(store.get_ref(), get_user_id(&session)).await?;
    let outcome = dashboard::create_event(store.get_ref(), input, organizer, today).await?;

    Ok(redirect_with_flash(&session, Section::CreateEvent, &outcome))
}

/// POST /organizer/dashboard/venues
pub async fn request_venue(
    store: web::Data<dyn DashboardStore>,
    session: Session,
    form: web::Form<VenueForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let outcome = dashboard::request_venue(store.get_ref(), form.into_inner().into_input()).await?;

    Ok(redirect_with_flash(&session, Section::RequestVenue, &outcome))
}

/// POST /organizer/dashboard/resources
pub async fn request_resources(
    store: web::Data<dyn DashboardStore>,
    session: Session,
    form: web::Form<ResourceForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let outcome =
        dashboard::request_resources(store.get_ref(), form.into_inner().into_input()).await?;

    Ok(redirect_with_flash(&session, Section::RequestResources, &outcome))
}
