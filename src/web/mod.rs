//! Web layer: the server-rendered demo page.

pub mod handlers;
pub mod routes;
