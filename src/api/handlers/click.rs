//! Handler for recording clicks.

use axum::{Json, extract::State};
use tracing::debug;

use crate::api::dto::click::{ClickRequest, ClickResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Records one click and returns the resulting count and appearance.
///
/// # Endpoint
///
/// `POST /api/click`
///
/// # Request
///
/// ```json
/// { "session": "q3Zl0aXB2cFE" }
/// ```
///
/// `session` may be null or omitted on the first click; the response always
/// carries the authoritative code to echo on the next click. A code the
/// server no longer knows starts a fresh session rather than failing.
///
/// # Response
///
/// ```json
/// {
///   "session": "q3Zl0aXB2cFE",
///   "clicks": 5,
///   "unlocked": true,
///   "message": "You just unlocked developer mode!",
///   "text_color": "#FF5733",
///   "background": "#121212"
/// }
/// ```
///
/// Below five clicks the message is "You clicked!", the text color is the
/// neutral gray, and `background` is omitted.
pub async fn click_handler(
    State(state): State<AppState>,
    Json(request): Json<ClickRequest>,
) -> Result<Json<ClickResponse>, AppError> {
    let outcome = state.clicks.record_click(request.session.as_deref()).await?;

    debug!(
        "Session {} now at {} clicks",
        outcome.session.code, outcome.session.clicks
    );

    Ok(Json(outcome.into()))
}
