//! Organizer dashboard: read models per section and the three
//! submission flows (event, venue request, resource request).

pub mod operations;
pub mod types;

pub use operations::*;
pub use types::*;
