use actix_web::{HttpResponse, http::header, web};

use crate::models::dashboard::DASHBOARD_PATH;

pub mod dashboard_handlers;

const NOT_FOUND_PAGE: &str = include_str!("../../templates/errors/404.html");

/// Register the organizer routes. Session middleware, the store and the
/// config are attached by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root_redirect))
        .route("/health", web::get().to(health))
        .route(DASHBOARD_PATH, web::get().to(dashboard_handlers::index))
        .route(
            "/organizer/dashboard/events",
            web::post().to(dashboard_handlers::create_event),
        )
        .route(
            "/organizer/dashboard/venues",
            web::post().to(dashboard_handlers::request_venue),
        )
        .route(
            "/organizer/dashboard/resources",
            web::post().to(dashboard_handlers::request_resources),
        );
}

async fn root_redirect() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, DASHBOARD_PATH))
        .finish()
}

async fn health() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .body(serde_json::json!({"ok": true}).to_string())
}

/// Default service; must be registered last.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(NOT_FOUND_PAGE)
}
