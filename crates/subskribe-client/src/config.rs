//! Service configuration.

use std::time::Duration;

use crate::error::{ClientError, Result};

/// Sandbox API used when `SUBSKRIBE_BASE_URL` is not set. No trailing slash.
pub const DEFAULT_BASE_URL: &str = "https://billy-sandbox.subskribe.net";

/// Timeout applied to every HTTP call unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment variable holding the API key (required).
pub const API_KEY_ENV: &str = "SUBSKRIBE_API_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "SUBSKRIBE_BASE_URL";

/// Environment variable overriding the timeout, in whole seconds.
pub const TIMEOUT_ENV: &str = "SUBSKRIBE_TIMEOUT_SECONDS";

/// Connection settings for a [`SubskribeService`](crate::SubskribeService).
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base URL every request path is appended to.
    pub base_url: String,

    /// Sent as `X-API-Key` on every request.
    pub api_key: String,

    /// Per-call timeout.
    pub timeout: Duration,
}

impl ServiceConfig {
    /// Create a configuration. A trailing slash on `base_url` is dropped.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if `SUBSKRIBE_API_KEY` is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the API key is missing or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ClientError::Configuration(format!(
                    "could not find api key env variable: {API_KEY_ENV}"
                ))
            })?;

        let base_url = lookup(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.into());

        let timeout = lookup(TIMEOUT_ENV)
            .and_then(|s| s.parse().ok())
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs);

        Ok(Self::new(base_url, api_key, timeout))
    }
}

// Redacts the API key.
impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
