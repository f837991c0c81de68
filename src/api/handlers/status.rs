//! Handler for reading a session's state without counting a click.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::click::ClickResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a session's current count and appearance.
///
/// # Endpoint
///
/// `GET /api/status/{session}`
///
/// Does not increment the counter. Responds 404 when the session is unknown
/// or was evicted.
pub async fn status_handler(
    Path(session): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ClickResponse>, AppError> {
    let outcome = state.clicks.status(&session).await?;

    Ok(Json(outcome.into()))
}
