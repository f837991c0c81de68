pub mod click_service;

pub use click_service::{ClickOutcome, ClickService};
