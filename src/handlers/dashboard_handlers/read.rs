use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::Local;

use crate::config::Config;
use crate::errors::{AppError, render};
use crate::models::dashboard::{self, Section};
use crate::store::DashboardStore;
use crate::templates_structs::{DashboardTemplate, PageContext};

use super::forms::SectionQuery;

/// GET /organizer/dashboard?section=... — render one dashboard section.
pub async fn index(
    store: web::Data<dyn DashboardStore>,
    config: web::Data<Config>,
    session: Session,
    query: web::Query<SectionQuery>,
) -> Result<HttpResponse, AppError> {
    let section = Section::parse(query.section.as_deref());
    let today = Local::now().date_naive();

    let data = dashboard::load_section(store.get_ref(), &section, today).await?;
    let ctx = PageContext::build(&session, &config.app_name, &section);

    let tmpl = DashboardTemplate {
        ctx,
        today: today.format("%Y-%m-%d").to_string(),
        counts: data.counts,
        available_venues: data.available_venues,
        my_bookings: data.my_bookings,
    };
    render(tmpl)
}
