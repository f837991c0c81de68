//! Click counting service.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::domain::counter::{Appearance, UNLOCK_THRESHOLD};
use crate::domain::entities::Session;
use crate::domain::repositories::SessionStore;
use crate::error::AppError;

/// A recorded click (or a status lookup) together with the appearance the
/// page should adopt.
#[derive(Debug, Clone)]
pub struct ClickOutcome {
    pub session: Session,
    pub appearance: Appearance,
}

/// Service orchestrating session minting and click counting.
///
/// The page sends whatever session code it holds (or none on the first
/// click); the service resolves it to a live session, increments the
/// counter, and derives the appearance from the new count.
pub struct ClickService {
    store: Arc<dyn SessionStore>,
}

impl ClickService {
    /// Creates a new click service.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Records one click.
    ///
    /// With no code, or a code the store no longer knows (evicted or from a
    /// previous process), a fresh session is minted and the click counts as
    /// its first. An evicted demo session must never break the page, so an
    /// unknown code is a restart, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot mint a session.
    pub async fn record_click(&self, code: Option<&str>) -> Result<ClickOutcome, AppError> {
        let session = match code {
            Some(code) => match self.store.record_click(code).await? {
                Some(session) => session,
                None => self.mint_and_click().await?,
            },
            None => self.mint_and_click().await?,
        };

        metrics::counter!("clicks_total").increment(1);

        if session.clicks == UNLOCK_THRESHOLD {
            info!("Session {} unlocked developer mode", session.code);
            metrics::counter!("devmode_unlocks_total").increment(1);
        }

        let appearance = Appearance::for_clicks(session.clicks);
        Ok(ClickOutcome {
            session,
            appearance,
        })
    }

    /// Looks up a session's count and appearance without incrementing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn status(&self, code: &str) -> Result<ClickOutcome, AppError> {
        let session = self
            .store
            .get(code)
            .await?
            .ok_or_else(|| AppError::not_found("Session not found", json!({ "session": code })))?;

        let appearance = Appearance::for_clicks(session.clicks);
        Ok(ClickOutcome {
            session,
            appearance,
        })
    }

    /// Number of sessions currently held by the store.
    ///
    /// Used by the health endpoint.
    pub async fn session_count(&self) -> Result<usize, AppError> {
        self.store.session_count().await
    }

    async fn mint_and_click(&self) -> Result<Session, AppError> {
        let minted = self.store.create_session().await?;

        self.store.record_click(&minted.code).await?.ok_or_else(|| {
            AppError::internal(
                "Freshly minted session disappeared",
                json!({ "session": minted.code }),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::counter::{
        ACCENT_TEXT_COLOR, CLICKED_MESSAGE, DARK_BACKGROUND, NEUTRAL_TEXT_COLOR, UNLOCKED_MESSAGE,
    };
    use crate::domain::repositories::MockSessionStore;

    fn session_with_clicks(code: &str, clicks: u64) -> Session {
        let mut session = Session::new(code.to_string());
        session.clicks = clicks;
        session
    }

    #[tokio::test]
    async fn test_click_without_session_mints_one() {
        let mut mock_store = MockSessionStore::new();

        mock_store
            .expect_create_session()
            .times(1)
            .returning(|| Ok(Session::new("fresh".to_string())));
        mock_store
            .expect_record_click()
            .withf(|code| code == "fresh")
            .times(1)
            .returning(|code| Ok(Some(session_with_clicks(code, 1))));

        let service = ClickService::new(Arc::new(mock_store));

        let outcome = service.record_click(None).await.unwrap();

        assert_eq!(outcome.session.code, "fresh");
        assert_eq!(outcome.session.clicks, 1);
        assert_eq!(outcome.appearance.message, CLICKED_MESSAGE);
        assert_eq!(outcome.appearance.text_color, NEUTRAL_TEXT_COLOR);
        assert!(outcome.appearance.background.is_none());
    }

    #[tokio::test]
    async fn test_click_with_unknown_session_mints_fresh_one() {
        let mut mock_store = MockSessionStore::new();

        mock_store
            .expect_record_click()
            .withf(|code| code == "evicted")
            .times(1)
            .returning(|_| Ok(None));
        mock_store
            .expect_create_session()
            .times(1)
            .returning(|| Ok(Session::new("fresh".to_string())));
        mock_store
            .expect_record_click()
            .withf(|code| code == "fresh")
            .times(1)
            .returning(|code| Ok(Some(session_with_clicks(code, 1))));

        let service = ClickService::new(Arc::new(mock_store));

        let outcome = service.record_click(Some("evicted")).await.unwrap();

        assert_eq!(outcome.session.code, "fresh");
        assert_eq!(outcome.session.clicks, 1);
    }

    #[tokio::test]
    async fn test_fifth_click_unlocks() {
        let mut mock_store = MockSessionStore::new();

        mock_store
            .expect_record_click()
            .times(1)
            .returning(|code| Ok(Some(session_with_clicks(code, 5))));

        let service = ClickService::new(Arc::new(mock_store));

        let outcome = service.record_click(Some("abc123")).await.unwrap();

        assert_eq!(outcome.appearance.message, UNLOCKED_MESSAGE);
        assert_eq!(outcome.appearance.text_color, ACCENT_TEXT_COLOR);
        assert_eq!(outcome.appearance.background, Some(DARK_BACKGROUND));
        assert!(outcome.session.unlocked());
    }

    #[tokio::test]
    async fn test_status_does_not_increment() {
        let mut mock_store = MockSessionStore::new();

        mock_store
            .expect_get()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|code| Ok(Some(session_with_clicks(code, 3))));
        mock_store.expect_record_click().times(0);

        let service = ClickService::new(Arc::new(mock_store));

        let outcome = service.status("abc123").await.unwrap();

        assert_eq!(outcome.session.clicks, 3);
        assert_eq!(outcome.appearance.message, CLICKED_MESSAGE);
    }

    #[tokio::test]
    async fn test_status_of_unknown_session_is_not_found() {
        let mut mock_store = MockSessionStore::new();

        mock_store.expect_get().times(1).returning(|_| Ok(None));

        let service = ClickService::new(Arc::new(mock_store));

        let result = service.status("missing").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
