//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::index_handler;
use axum::{Router, routing::get};

/// Public web routes.
///
/// # Endpoints
///
/// - `GET /` - Demo page with the click button
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(index_handler))
}
