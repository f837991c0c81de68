//! Session entity holding one visitor's click counter.

use chrono::{DateTime, Utc};

use crate::domain::counter;

/// A counting session for one open page.
///
/// The page keeps the session code in a script variable, so a reload starts
/// a fresh session — the counter lives exactly as long as the page does.
/// The click count is monotonic: it starts at zero, grows by one per click,
/// and never decreases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub code: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

impl Session {
    /// Creates a fresh session with zero clicks.
    pub fn new(code: String) -> Self {
        let now = Utc::now();
        Self {
            code,
            clicks: 0,
            created_at: now,
            last_seen: now,
        }
    }

    /// Registers one click: increments the counter and touches `last_seen`.
    ///
    /// Saturates at `u64::MAX` so the counter can never wrap back down.
    pub fn register_click(&mut self) {
        self.clicks = self.clicks.saturating_add(1);
        self.last_seen = Utc::now();
    }

    /// Whether this session has crossed the unlock threshold.
    pub const fn unlocked(&self) -> bool {
        counter::is_unlocked(self.clicks)
    }
}
