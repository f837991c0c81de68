//! Bounded in-memory implementation of [`SessionStore`].

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::Session;
use crate::domain::repositories::SessionStore;
use crate::error::AppError;
use crate::utils::codegen::gen_code;

/// In-memory session map with a hard capacity.
///
/// Sessions are never persisted; they live for as long as the page that
/// minted them keeps clicking, and the process forgets everything on
/// shutdown. When the map is full, minting a new session evicts the
/// least-recently-seen one.
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    capacity: usize,
}

impl MemorySessionStore {
    /// Creates an empty store holding at most `capacity` sessions.
    pub fn new(capacity: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    /// Evicts the session with the oldest `last_seen`. Caller holds the
    /// write lock.
    fn evict_stalest(sessions: &mut HashMap<String, Session>) {
        let stalest = sessions
            .values()
            .min_by_key(|s| s.last_seen)
            .map(|s| s.code.clone());

        if let Some(code) = stalest {
            debug!("Evicting stale session {}", code);
            sessions.remove(&code);
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create_session(&self) -> Result<Session, AppError> {
        let mut sessions = self.sessions.write().await;

        if sessions.len() >= self.capacity {
            Self::evict_stalest(&mut sessions);
        }

        // Codes are 72 bits of OS randomness, so a collision means the RNG
        // is broken; retry a couple of times and then give up.
        for _ in 0..3 {
            let code = gen_code().map_err(|e| {
                AppError::internal("Failed to mint session code", json!({ "source": e.to_string() }))
            })?;

            if !sessions.contains_key(&code) {
                let session = Session::new(code.clone());
                sessions.insert(code, session.clone());
                return Ok(session);
            }
        }

        Err(AppError::internal(
            "Failed to mint a unique session code",
            json!({}),
        ))
    }

    async fn record_click(&self, code: &str) -> Result<Option<Session>, AppError> {
        let mut sessions = self.sessions.write().await;

        Ok(sessions.get_mut(code).map(|session| {
            session.register_click();
            session.clone()
        }))
    }

    async fn get(&self, code: &str) -> Result<Option<Session>, AppError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(code).cloned())
    }

    async fn session_count(&self) -> Result<usize, AppError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.len())
    }
}
