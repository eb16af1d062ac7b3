//! Client configuration.

use std::time::Duration;

use crate::error::{ApiError, Result};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for an [`EmbyClient`](crate::EmbyClient).
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `EMBY_URL`, `EMBY_API_KEY` and the optional `EMBY_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup("EMBY_URL")
            .ok_or_else(|| ApiError::InvalidConfig("EMBY_URL is not set".to_string()))?;
        let api_key = lookup("EMBY_API_KEY")
            .ok_or_else(|| ApiError::InvalidConfig("EMBY_API_KEY is not set".to_string()))?;

        let mut config = Self::new(base_url, api_key);
        if let Some(raw) = lookup("EMBY_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ApiError::InvalidConfig(format!("EMBY_TIMEOUT_SECS is not a number: {raw}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Check the settings and return them with the base URL normalized.
    pub fn validate(self) -> Result<Self> {
        let base_url = self.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::InvalidConfig("base URL cannot be empty".to_string()));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::InvalidConfig(
                "base URL must start with http:// or https://".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(ApiError::InvalidConfig("timeout must be non-zero".to_string()));
        }
        Ok(Self { base_url, ..self })
    }
}
