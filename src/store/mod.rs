//! Storage collaborator for the organizer dashboard.
//!
//! The dashboard only counts, lists, and appends. `PgStore` serves
//! production traffic; `MemoryStore` backs tests and demo runs.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::booking::BookingView;
use crate::models::event::NewEvent;
use crate::models::resource::NewResource;
use crate::models::venue::{NewVenue, Venue};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait DashboardStore: Send + Sync {
    async fn count_events(&self) -> Result<i64, AppError>;
    async fn count_venues(&self) -> Result<i64, AppError>;
    async fn count_resources(&self) -> Result<i64, AppError>;
    async fn count_bookings(&self) -> Result<i64, AppError>;

    /// Venues whose status is exactly `status`.
    async fn venues_with_status(&self, status: &str) -> Result<Vec<Venue>, AppError>;

    /// Bookings inner-joined to their event and venue, newest date first.
    /// Rows carry the stored status.
    async fn booking_rows(&self) -> Result<Vec<BookingView>, AppError>;

    /// Lowest user id, if any user exists.
    async fn first_user_id(&self) -> Result<Option<i64>, AppError>;

    async fn insert_event(&self, event: &NewEvent) -> Result<i64, AppError>;
    async fn insert_venue(&self, venue: &NewVenue) -> Result<i64, AppError>;
    async fn insert_resource(&self, resource: &NewResource) -> Result<i64, AppError>;
}
