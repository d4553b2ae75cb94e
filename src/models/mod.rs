pub mod booking;
pub mod dashboard;
pub mod event;
pub mod resource;
pub mod user;
pub mod venue;

pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_APPROVED: &str = "Approved";
pub const STATUS_COMPLETED: &str = "Completed";
