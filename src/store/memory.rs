use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};

use super::DashboardStore;
use crate::errors::AppError;
use crate::models::booking::{Booking, BookingView, NewBooking};
use crate::models::event::{Event, NewEvent};
use crate::models::resource::{NewResource, Resource};
use crate::models::user::User;
use crate::models::venue::{NewVenue, Venue};
use crate::models::STATUS_APPROVED;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    events: Vec<Event>,
    venues: Vec<Venue>,
    resources: Vec<Resource>,
    bookings: Vec<Booking>,
    next_user_id: i64,
    next_event_id: i64,
    next_venue_id: i64,
    next_resource_id: i64,
    next_booking_id: i64,
}

fn next_id(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

/// In-process store with the same query semantics as `PgStore`.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with a few users, venues, events and bookings around `today`.
    pub fn demo(today: NaiveDate) -> Self {
        let store = Self::new();
        let organizer = store.add_user("organizer");
        store.add_user("guest");

        let main_hall = store.add_venue(NewVenue {
            name: "Main Hall".to_string(),
            details: Some("Ground floor, stage and PA".to_string()),
            capacity: 400,
            location: "Building A".to_string(),
            status: STATUS_APPROVED.to_string(),
        });
        let garden = store.add_venue(NewVenue {
            name: "Garden Terrace".to_string(),
            details: None,
            capacity: 120,
            location: "Building C".to_string(),
            status: STATUS_APPROVED.to_string(),
        });
        store.add_venue(NewVenue::requested("Lecture Room 2".to_string(), None));

        let schedule = [
            ("Spring Fair", main_hall, -14),
            ("Team Offsite", garden, -1),
            ("Product Launch", main_hall, 0),
            ("Summer Social", garden, 21),
        ];
        for (title, venue_id, offset) in schedule {
            let date = today + Duration::days(offset);
            let Some(start) = date.and_hms_opt(10, 0, 0) else {
                continue;
            };
            let event_id = store.add_event(NewEvent::starting_at(
                title.to_string(),
                None,
                start,
                Some(organizer),
            ));
            store.add_booking(NewBooking::pending(event_id, venue_id, date));
        }

        store
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add_user(&self, name: &str) -> i64 {
        let mut t = self.lock();
        let id = next_id(&mut t.next_user_id);
        t.users.push(User { id, name: name.to_string() });
        id
    }

    pub fn add_event(&self, event: NewEvent) -> i64 {
        let mut t = self.lock();
        let id = next_id(&mut t.next_event_id);
        t.events.push(Event {
            id,
            title: event.title,
            description: event.description,
            start_datetime: event.start_datetime,
            end_datetime: event.end_datetime,
            organizer_id: event.organizer_id,
        });
        id
    }

    pub fn add_venue(&self, venue: NewVenue) -> i64 {
        let mut t = self.lock();
        let id = next_id(&mut t.next_venue_id);
        t.venues.push(Venue {
            id,
            name: venue.name,
            details: venue.details,
            capacity: venue.capacity,
            location: venue.location,
            status: venue.status,
        });
        id
    }

    pub fn add_resource(&self, resource: NewResource) -> i64 {
        let mut t = self.lock();
        let id = next_id(&mut t.next_resource_id);
        t.resources.push(Resource {
            id,
            resource_type: resource.resource_type,
            resource_name: resource.resource_name,
            quantity: resource.quantity,
            status: resource.status,
        });
        id
    }

    pub fn add_booking(&self, booking: NewBooking) -> i64 {
        let mut t = self.lock();
        let id = next_id(&mut t.next_booking_id);
        t.bookings.push(Booking {
            id,
            event_id: booking.event_id,
            venue_id: booking.venue_id,
            booking_date: booking.booking_date,
            status: booking.status,
        });
        id
    }

    /// Remove a venue without touching bookings that reference it.
    pub fn remove_venue(&self, id: i64) -> bool {
        let mut t = self.lock();
        let before = t.venues.len();
        t.venues.retain(|v| v.id != id);
        t.venues.len() != before
    }

    /// Remove an event without touching bookings that reference it.
    pub fn remove_event(&self, id: i64) -> bool {
        let mut t = self.lock();
        let before = t.events.len();
        t.events.retain(|e| e.id != id);
        t.events.len() != before
    }

    pub fn events(&self) -> Vec<Event> {
        self.lock().events.clone()
    }

    pub fn venues(&self) -> Vec<Venue> {
        self.lock().venues.clone()
    }

    pub fn resources(&self) -> Vec<Resource> {
        self.lock().resources.clone()
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.lock().bookings.clone()
    }
}

#[async_trait]
impl DashboardStore for MemoryStore {
    async fn count_events(&self) -> Result<i64, AppError> {
        Ok(self.lock().events.len() as i64)
    }

    async fn count_venues(&self) -> Result<i64, AppError> {
        Ok(self.lock().venues.len() as i64)
    }

    async fn count_resources(&self) -> Result<i64, AppError> {
        Ok(self.lock().resources.len() as i64)
    }

    async fn count_bookings(&self) -> Result<i64, AppError> {
        Ok(self.lock().bookings.len() as i64)
    }

    async fn venues_with_status(&self, status: &str) -> Result<Vec<Venue>, AppError> {
        let mut venues: Vec<Venue> = self
            .lock()
            .venues
            .iter()
            .filter(|v| v.status == status)
            .cloned()
            .collect();
        venues.sort_by(|a, b| (&a.name, a.id).cmp(&(&b.name, b.id)));
        Ok(venues)
    }

    async fn booking_rows(&self) -> Result<Vec<BookingView>, AppError> {
        let t = self.lock();
        let mut rows: Vec<BookingView> = t
            .bookings
            .iter()
            .filter_map(|b| {
                let event = t.events.iter().find(|e| e.id == b.event_id)?;
                let venue = t.venues.iter().find(|v| v.id == b.venue_id)?;
                Some(BookingView {
                    event_name: event.title.clone(),
                    venue_name: venue.name.clone(),
                    date: b.booking_date,
                    status: b.status.clone(),
                })
            })
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }

    async fn first_user_id(&self) -> Result<Option<i64>, AppError> {
        Ok(self.lock().users.iter().map(|u| u.id).min())
    }

    async fn insert_event(&self, event: &NewEvent) -> Result<i64, AppError> {
        Ok(self.add_event(event.clone()))
    }

    async fn insert_venue(&self, venue: &NewVenue) -> Result<i64, AppError> {
        Ok(self.add_venue(venue.clone()))
    }

    async fn insert_resource(&self, resource: &NewResource) -> Result<i64, AppError> {
        Ok(self.add_resource(resource.clone()))
    }
}
