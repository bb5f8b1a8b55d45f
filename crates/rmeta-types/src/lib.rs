#[allow(non_snake_case)]
pub mod status_code;

pub mod status;
pub mod result;
pub mod time;

// Re-export commonly used items at the crate root.
pub use result::{Result, make_error, make_error_msg};
pub use status::Status;
pub use status_code::*;
pub use time::UtcTime;
