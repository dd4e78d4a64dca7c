//! Client configuration loaded from environment variables.
//!
//! A `.env` file is read at startup through `dotenvy`, then every value is
//! taken from the process environment.
//!
//! # Environment Variables
//!
//! ## Required Variables
//! - `BACKEND_URL`: Base URL of the movie social network backend
//!
//! ## Optional Variables
//! - `RUST_LOG`: Logging level (default: "info,client=debug")
//! - `REQUEST_TIMEOUT_SECS`: Upper bound for a single backend request (default: 10)
//! - `NOTIFICATION_AUTO_HIDE_SECS`: How long an error banner stays visible (default: 6)
//! - `POSTER_BASE_URL`: Prefix for movie poster paths (default: TMDB original size)
//! - `USER_AGENT`: User-Agent sent with every request (default: "client/<version>")

use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/original/";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Backend base URL without trailing slash (e.g., `http://localhost:8080`)
    pub backend_url: String,

    /// Seconds before a pending request is treated as failed
    pub request_timeout_secs: u64,

    /// Seconds an error banner stays on screen
    pub notification_auto_hide_secs: u64,

    pub poster_base_url: String,

    pub user_agent: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `BACKEND_URL` is missing or a numeric variable
    /// cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            backend_url: env_required("BACKEND_URL")?
                .trim_end_matches('/')
                .to_string(),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 10)?,
            notification_auto_hide_secs: env_or("NOTIFICATION_AUTO_HIDE_SECS", 6)?,
            poster_base_url: env_or("POSTER_BASE_URL", DEFAULT_POSTER_BASE_URL.to_string())?,
            user_agent: env_or(
                "USER_AGENT",
                format!("client/{}", env!("CARGO_PKG_VERSION")),
            )?,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn notification_auto_hide(&self) -> Duration {
        Duration::from_secs(self.notification_auto_hide_secs)
    }

    /// Configuration pointing at `backend_url` with every default applied.
    pub fn for_backend(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into().trim_end_matches('/').to_string(),
            request_timeout_secs: 10,
            notification_auto_hide_secs: 6,
            poster_base_url: DEFAULT_POSTER_BASE_URL.to_string(),
            user_agent: format!("client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Load a required environment variable.
///
/// # Errors
///
/// Returns an error if the variable is not set.
fn env_required(key: &str) -> anyhow::Result<String> {
    std::env::var(key).map_err(|_| anyhow::anyhow!("Missing required environment variable: {}", key))
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
