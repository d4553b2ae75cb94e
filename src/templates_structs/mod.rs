// Template context structures for Askama templates.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::take_flash;
use crate::models::dashboard::Section;

mod dashboard;

pub use dashboard::*;

/// One entry of the dashboard navigation.
pub struct NavItem {
    pub label: String,
    pub url: String,
    pub active: bool,
}

/// Common context shared by all pages.
/// Templates access these as `ctx.flash`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub app_name: String,
    pub flash: Option<String>,
    pub csrf_token: String,
    pub section: String,
    pub section_label: String,
    pub nav_items: Vec<NavItem>,
}

impl PageContext {
    /// Consumes any pending flash message from the session.
    pub fn build(session: &Session, app_name: &str, section: &Section) -> Self {
        let flash = take_flash(session);
        let csrf_token = csrf::get_or_create_token(session);
        let nav_items = Section::NAV
            .iter()
            .map(|s| NavItem {
                label: s.label().to_string(),
                url: s.url(),
                active: s == section,
            })
            .collect();
        Self {
            app_name: app_name.to_string(),
            flash,
            csrf_token,
            section: section.as_str().to_string(),
            section_label: section.label().to_string(),
            nav_items,
        }
    }

    pub fn is_section(&self, name: &str) -> bool {
        self.section == name
    }
}
