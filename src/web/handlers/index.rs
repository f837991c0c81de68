//! Demo page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::domain::counter::{CLICKED_MESSAGE, NEUTRAL_TEXT_COLOR, UNLOCK_THRESHOLD};

/// Template for the demo page.
///
/// Renders `templates/index.html`: a button, a status element, and the
/// click script. The initial status text and color match the locked branch
/// so the page looks consistent before the first click.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub message: &'static str,
    pub text_color: &'static str,
    pub unlock_threshold: u64,
}

/// Renders the demo page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {
        message: CLICKED_MESSAGE,
        text_color: NEUTRAL_TEXT_COLOR,
        unlock_threshold: UNLOCK_THRESHOLD,
    }
}
