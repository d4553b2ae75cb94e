use askama::Template;

use super::PageContext;
use crate::models::booking::BookingView;
use crate::models::dashboard::OverviewCounts;
use crate::models::venue::Venue;

#[derive(Template)]
#[template(path = "organizer/dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    /// `YYYY-MM-DD`, lower bound for the event date picker.
    pub today: String,
    pub counts: Option<OverviewCounts>,
    pub available_venues: Option<Vec<Venue>>,
    pub my_bookings: Option<Vec<BookingView>>,
}
