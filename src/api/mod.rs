//! REST API layer: DTOs, handlers, routes, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
