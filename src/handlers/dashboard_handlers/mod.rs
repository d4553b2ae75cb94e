pub mod forms;
pub mod read;
pub mod submit;

pub use read::index;
pub use submit::{create_event, request_resources, request_venue};
