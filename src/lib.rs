//! # Click Counter
//!
//! A tiny demo service built with Axum: a page with one button, a
//! server-owned click counter, and a five-click "developer mode" gate.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture layering, scaled to the size of the
//! problem:
//!
//! - **Domain Layer** ([`domain`]) - Counter rules, session entity, store trait
//! - **Application Layer** ([`application`]) - Click service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Bounded in-memory store
//! - **API Layer** ([`api`]) - Click/status/health handlers, DTOs, middleware
//! - **Web Layer** ([`web`]) - Server-rendered demo page
//!
//! ## Behavior
//!
//! Each click posted to `/api/click` increments a per-session counter.
//! Clicks 1-4 answer with "You clicked!" in neutral gray; the fifth and
//! every later click answer with "You just unlocked developer mode!", the
//! accent color, and the dark page background. Counters only ever grow, so
//! the unlock is one-way.
//!
//! ## Quick Start
//!
//! ```bash
//! # All configuration is optional
//! export LISTEN="0.0.0.0:3000"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ClickOutcome, ClickService};
    pub use crate::domain::entities::Session;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
