//! Runtime settings loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::outbound::github::DEFAULT_USER_AGENT;

const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The configured API base URL does not parse.
    #[error("invalid API base URL '{value}': {message}")]
    InvalidBaseUrl {
        /// Configured value.
        value: String,
        /// Parser detail.
        message: String,
    },
    /// The configured API base URL is not HTTP(S).
    #[error("API base URL '{value}' must use http or https")]
    UnsupportedScheme {
        /// Configured value.
        value: String,
    },
}

/// Configuration values controlling the GitHub client.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GITFIND")]
pub struct GitfindSettings {
    /// Base URL of the GitHub REST API.
    pub api_base_url: Option<String>,
    /// User agent sent with every request.
    pub user_agent: Option<String>,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: Option<u64>,
    /// Emit logs as JSON lines.
    #[ortho_config(default = false)]
    pub log_json: bool,
}

impl GitfindSettings {
    /// Return the configured API base URL, falling back to the public API.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the value is not an absolute HTTP(S) URL.
    pub fn api_base_url(&self) -> Result<Url, SettingsError> {
        let raw = self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL);
        let url = Url::parse(raw).map_err(|error| SettingsError::InvalidBaseUrl {
            value: raw.to_owned(),
            message: error.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SettingsError::UnsupportedScheme {
                value: raw.to_owned(),
            });
        }
        Ok(url)
    }

    /// Return the configured user agent, falling back to the crate default.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.user_agent
            .as_deref()
            .filter(|agent| !agent.trim().is_empty())
            .unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Return the per-request timeout; never shorter than one second.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let seconds = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .max(1);
        Duration::from_secs(seconds)
    }
}
