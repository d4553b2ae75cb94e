use super::STATUS_PENDING;

pub const UNCONFIRMED_LOCATION: &str = "To be confirmed";

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub details: Option<String>,
    pub capacity: i32,
    pub location: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewVenue {
    pub name: String,
    pub details: Option<String>,
    pub capacity: i32,
    pub location: String,
    pub status: String,
}

impl NewVenue {
    /// A venue request from an organizer: capacity and location are filled in on approval.
    pub fn requested(name: String, details: Option<String>) -> Self {
        Self {
            name,
            details,
            capacity: 0,
            location: UNCONFIRMED_LOCATION.to_string(),
            status: STATUS_PENDING.to_string(),
        }
    }
}
