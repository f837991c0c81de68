//! API route configuration.

use crate::api::handlers::{click_handler, status_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes.
///
/// # Endpoints
///
/// - `POST /click`             - Record a click, minting a session if needed
/// - `GET  /status/{session}`  - Current count and appearance, no increment
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/click", post(click_handler))
        .route("/status/{session}", get(status_handler))
}
