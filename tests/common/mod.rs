//! Shared test infrastructure for the organizer dashboard.
//!
//! - `seeded_store()` - in-memory store with users, venues, events and bookings
//! - `init_app!(store)` - actix test service wired like `main`, cookie sessions included
//! - cookie/body/CSRF helpers for walking a redirect cycle

#![allow(dead_code)]

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::test;
use chrono::{Duration, Local, NaiveDate};
use regex::Regex;

use organizer::config::Config;
use organizer::models::booking::NewBooking;
use organizer::models::event::NewEvent;
use organizer::models::venue::NewVenue;
use organizer::store::MemoryStore;

// ============================================================================
// DATES
// ============================================================================

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn day(offset: i64) -> NaiveDate {
    today() + Duration::days(offset)
}

/// `YYYY-MM-DD` for today + `offset` days, as a date input submits it.
pub fn form_date(offset: i64) -> String {
    day(offset).format("%Y-%m-%d").to_string()
}

// ============================================================================
// STORE SETUP
// ============================================================================

pub fn venue_with_status(name: &str, status: &str) -> NewVenue {
    NewVenue {
        name: name.to_string(),
        details: None,
        capacity: 50,
        location: "Campus".to_string(),
        status: status.to_string(),
    }
}

pub fn event_on(store: &MemoryStore, title: &str, date: NaiveDate) -> i64 {
    let start = date.and_hms_opt(9, 0, 0).expect("valid time");
    store.add_event(NewEvent::starting_at(title.to_string(), None, start, None))
}

/// Users "alice" and "bob"; "Main Hall" (Approved), "Annex" (Pending);
/// three Pending bookings at Main Hall dated yesterday, today and tomorrow.
pub fn seeded_store() -> Arc<MemoryStore> {
    let store = MemoryStore::new();
    store.add_user("alice");
    store.add_user("bob");

    let hall = store.add_venue(venue_with_status("Main Hall", "Approved"));
    store.add_venue(venue_with_status("Annex", "Pending"));

    for (title, offset) in [("Yesterday Expo", -1), ("Today Talk", 0), ("Tomorrow Gala", 1)] {
        let event = event_on(&store, title, day(offset));
        store.add_booking(NewBooking::pending(event, hall, day(offset)));
    }

    Arc::new(store)
}

// ============================================================================
// HTTP HELPERS
// ============================================================================

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "STORE_BACKEND" => Some("memory".to_string()),
        "APP_NAME" => Some("Test Organizer".to_string()),
        _ => None,
    })
    .expect("test config")
}

pub fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::from(&[7u8; 64]))
        .cookie_secure(false)
        .build()
}

/// Build the test service around an `Arc<MemoryStore>`.
#[allow(unused_macros)]
macro_rules! init_app {
    ($store:expr) => {{
        let store: std::sync::Arc<dyn organizer::store::DashboardStore> = $store;
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(common::session_middleware())
                .app_data(actix_web::web::Data::from(store))
                .app_data(actix_web::web::Data::new(common::test_config()))
                .configure(organizer::handlers::configure)
                .default_service(actix_web::web::to(organizer::handlers::not_found)),
        )
        .await
    }};
}

/// Session cookie set by `resp`, or `previous` when the session was not touched.
pub fn next_cookie<B>(resp: &ServiceResponse<B>, previous: Option<Cookie<'static>>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .next()
        .map(|c| c.into_owned())
        .or(previous)
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(actix_web::http::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub async fn body_string<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Lift the CSRF token out of a rendered form.
pub fn csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).expect("regex");
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("page should carry a CSRF token")
}
