//! Repository trait for counting sessions.

use crate::domain::entities::Session;
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for counting sessions.
///
/// Sessions are ephemeral: a counter lives only while its page stays open,
/// so nothing here persists past process shutdown.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::MemorySessionStore`] - bounded in-memory map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Mints a fresh session with a unique code and zero clicks.
    ///
    /// May evict another session to make room.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if a unique code cannot be minted.
    async fn create_session(&self) -> Result<Session, AppError>;

    /// Records one click against an existing session.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Session))` with the updated session if the code exists
    /// - `Ok(None)` if the code is unknown or was evicted
    async fn record_click(&self, code: &str) -> Result<Option<Session>, AppError>;

    /// Looks up a session without touching its counter.
    async fn get(&self, code: &str) -> Result<Option<Session>, AppError>;

    /// Number of sessions currently held.
    ///
    /// Used by the health endpoint to report store occupancy.
    async fn session_count(&self) -> Result<usize, AppError>;
}
