//! DTOs for the click and status endpoints.

use serde::{Deserialize, Serialize};

use crate::application::services::ClickOutcome;

/// Request body for `POST /api/click`.
///
/// `session` is absent on the page's first click; every later click echoes
/// the code from the previous response.
#[derive(Debug, Deserialize)]
pub struct ClickRequest {
    #[serde(default)]
    pub session: Option<String>,
}

/// Click (and status) response: the authoritative session code, the count,
/// and the appearance the page should adopt.
#[derive(Debug, Serialize)]
pub struct ClickResponse {
    pub session: String,
    pub clicks: u64,
    pub unlocked: bool,
    pub message: &'static str,
    pub text_color: &'static str,

    /// Present only once developer mode is unlocked; the locked branch
    /// leaves the page background alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<&'static str>,
}

impl From<ClickOutcome> for ClickResponse {
    fn from(outcome: ClickOutcome) -> Self {
        Self {
            unlocked: outcome.session.unlocked(),
            session: outcome.session.code,
            clicks: outcome.session.clicks,
            message: outcome.appearance.message,
            text_color: outcome.appearance.text_color,
            background: outcome.appearance.background,
        }
    }
}
