//! HTTP request handlers for API endpoints.

pub mod click;
pub mod health;
pub mod status;

pub use click::click_handler;
pub use health::health_handler;
pub use status::status_handler;
