use async_trait::async_trait;
use sqlx::PgPool;

use super::DashboardStore;
use crate::errors::AppError;
use crate::models::booking::BookingView;
use crate::models::event::NewEvent;
use crate::models::resource::NewResource;
use crate::models::venue::{NewVenue, Venue};

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn count(&self, sql: &str) -> Result<i64, AppError> {
        let n: i64 = sqlx::query_scalar(sql).fetch_one(&self.pool).await?;
        Ok(n)
    }
}

#[async_trait]
impl DashboardStore for PgStore {
    async fn count_events(&self) -> Result<i64, AppError> {
        self.count("SELECT COUNT(*) FROM events").await
    }

    async fn count_venues(&self) -> Result<i64, AppError> {
        self.count("SELECT COUNT(*) FROM venues").await
    }

    async fn count_resources(&self) -> Result<i64, AppError> {
        self.count("SELECT COUNT(*) FROM resources").await
    }

    async fn count_bookings(&self) -> Result<i64, AppError> {
        self.count("SELECT COUNT(*) FROM bookings").await
    }

    async fn venues_with_status(&self, status: &str) -> Result<Vec<Venue>, AppError> {
        let venues = sqlx::query_as::<_, Venue>(
            "SELECT id, name, details, capacity, location, status \
             FROM venues \
             WHERE status = $1 \
             ORDER BY name, id",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;
        Ok(venues)
    }

    async fn booking_rows(&self) -> Result<Vec<BookingView>, AppError> {
        let rows = sqlx::query_as::<_, BookingView>(
            "SELECT e.title AS event_name, v.name AS venue_name, \
                    b.booking_date AS date, b.status \
             FROM bookings b \
             JOIN events e ON e.id = b.event_id \
             JOIN venues v ON v.id = b.venue_id \
             ORDER BY b.booking_date DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn first_user_id(&self) -> Result<Option<i64>, AppError> {
        let id: Option<i64> = sqlx::query_scalar("SELECT id FROM users ORDER BY id LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;
        Ok(id)
    }

    async fn insert_event(&self, event: &NewEvent) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO events (title, description, start_datetime, end_datetime, organizer_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.start_datetime)
        .bind(event.end_datetime)
        .bind(event.organizer_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn insert_venue(&self, venue: &NewVenue) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO venues (name, details, capacity, location, status) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&venue.name)
        .bind(&venue.details)
        .bind(venue.capacity)
        .bind(&venue.location)
        .bind(&venue.status)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn insert_resource(&self, resource: &NewResource) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO resources (resource_type, resource_name, quantity, status) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&resource.resource_type)
        .bind(&resource.resource_name)
        .bind(resource.quantity)
        .bind(&resource.status)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }
}
