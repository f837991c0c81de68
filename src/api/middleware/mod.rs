//! API middleware.

pub mod rate_limit;
pub mod tracing;
