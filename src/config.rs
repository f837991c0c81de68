//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! All variables are optional and default to something sensible for local
//! development:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SESSION_CAPACITY` - Max in-memory sessions (default: 10000, min: 100)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Directory whose contents are served under `/static`.
    pub static_dir: String,
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of counting sessions held in memory before the
    /// least-recently-seen one is evicted.
    pub session_capacity: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let session_capacity = env::var("SESSION_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        Self {
            listen_addr,
            static_dir,
            log_level,
            log_format,
            session_capacity,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `session_capacity` is out of range
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `static_dir` is empty
    pub fn validate(&self) -> Result<()> {
        if self.session_capacity < 100 {
            anyhow::bail!(
                "SESSION_CAPACITY must be at least 100, got {}",
                self.session_capacity
            );
        }

        if self.session_capacity > 1_000_000 {
            anyhow::bail!(
                "SESSION_CAPACITY is too large (max: 1000000), got {}",
                self.session_capacity
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.static_dir.is_empty() {
            anyhow::bail!("STATIC_DIR must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Static directory: {}", self.static_dir);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Session capacity: {}", self.session_capacity);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
