use std::sync::Arc;

use crate::application::services::ClickService;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub clicks: Arc<ClickService>,
}

impl AppState {
    pub fn new(clicks: Arc<ClickService>) -> Self {
        Self { clicks }
    }
}
