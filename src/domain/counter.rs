//! Click counter rules: the unlock threshold and the appearance derived
//! from a click count.
//!
//! The whole business rule fits in one branch: below five clicks the page
//! shows a neutral acknowledgement, from the fifth click on it switches to
//! the "developer mode" look. Because counts only ever grow, the switch is
//! one-way.

/// Number of clicks after which developer mode is unlocked.
pub const UNLOCK_THRESHOLD: u64 = 5;

/// Status message shown below the threshold.
pub const CLICKED_MESSAGE: &str = "You clicked!";

/// Status message shown at and beyond the threshold.
pub const UNLOCKED_MESSAGE: &str = "You just unlocked developer mode!";

/// Status text color below the threshold.
pub const NEUTRAL_TEXT_COLOR: &str = "#333";

/// Status text color once unlocked.
pub const ACCENT_TEXT_COLOR: &str = "#FF5733";

/// Page background once unlocked.
pub const DARK_BACKGROUND: &str = "#121212";

/// Returns whether a click count has crossed the unlock threshold.
pub const fn is_unlocked(clicks: u64) -> bool {
    clicks >= UNLOCK_THRESHOLD
}

/// Page appearance derived from a click count.
///
/// `background` is `None` below the threshold: the locked branch only
/// touches the status text, never the page background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub message: &'static str,
    pub text_color: &'static str,
    pub background: Option<&'static str>,
}

impl Appearance {
    /// Computes the appearance for a click count.
    pub const fn for_clicks(clicks: u64) -> Self {
        if is_unlocked(clicks) {
            Self {
                message: UNLOCKED_MESSAGE,
                text_color: ACCENT_TEXT_COLOR,
                background: Some(DARK_BACKGROUND),
            }
        } else {
            Self {
                message: CLICKED_MESSAGE,
                text_color: NEUTRAL_TEXT_COLOR,
                background: None,
            }
        }
    }
}
