#![allow(dead_code)]

use std::sync::Arc;

use click_counter::application::services::ClickService;
use click_counter::infrastructure::store::MemorySessionStore;
use click_counter::state::AppState;

pub fn create_test_state() -> AppState {
    create_test_state_with_capacity(100)
}

pub fn create_test_state_with_capacity(capacity: usize) -> AppState {
    let store = Arc::new(MemorySessionStore::new(capacity));
    AppState::new(Arc::new(ClickService::new(store)))
}
