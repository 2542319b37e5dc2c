//! Client configuration: where to send requests and how long to wait.
//!
//! The browser build uses [`ClientConfig::default`], which targets the
//! same-origin endpoint. Native front ends call [`ClientConfig::from_env`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use form::{DEFAULT_LOCATION, FormFields};

pub const DEFAULT_ENDPOINT_PATH: &str = "/api/activities";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading client configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL: {0} (expected http:// or https://)")]
    InvalidBaseUrl(String),
    #[error("invalid endpoint path: {0} (expected a leading '/')")]
    InvalidEndpointPath(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Timeouts {
    #[must_use]
    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and authority, without trailing slash. Empty means same-origin.
    pub base_url: String,
    pub endpoint_path: String,
    /// City written into the location field on reset.
    pub default_location: String,
    pub timeouts: Timeouts,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_owned(),
            default_location: DEFAULT_LOCATION.to_owned(),
            timeouts: Timeouts::default(),
        }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `ACTIVITIES_BASE_URL`: default empty (same-origin)
    /// - `ACTIVITIES_ENDPOINT_PATH`: default `/api/activities`
    /// - `ACTIVITIES_DEFAULT_LOCATION`: default `Yverdon-les-Bains`
    /// - `ACTIVITIES_REQUEST_TIMEOUT_SECS`: default 20
    /// - `ACTIVITIES_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the base URL or endpoint path is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the base URL or endpoint path is malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup("ACTIVITIES_BASE_URL").unwrap_or_default();
        let endpoint_path = lookup("ACTIVITIES_ENDPOINT_PATH")
            .unwrap_or_else(|| DEFAULT_ENDPOINT_PATH.to_owned());
        let default_location = lookup("ACTIVITIES_DEFAULT_LOCATION")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOCATION.to_owned());
        let timeouts = Timeouts {
            request_secs: parse_secs(
                lookup("ACTIVITIES_REQUEST_TIMEOUT_SECS"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            ),
            connect_secs: parse_secs(
                lookup("ACTIVITIES_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            ),
        };

        Self {
            base_url,
            endpoint_path,
            default_location,
            timeouts,
        }
        .validated()
    }

    /// Replace the base URL, re-checking the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] for a non-HTTP URL.
    pub fn with_base_url(self, base_url: &str) -> Result<Self, ConfigError> {
        Self {
            base_url: base_url.to_owned(),
            ..self
        }
        .validated()
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        let base_url = self.base_url.trim().trim_end_matches('/').to_owned();
        if !base_url.is_empty()
            && !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }
        if !self.endpoint_path.starts_with('/') {
            return Err(ConfigError::InvalidEndpointPath(self.endpoint_path));
        }
        self.base_url = base_url;
        Ok(self)
    }

    /// Full URL the form posts to.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint_path)
    }

    /// The form as it looks after a reset.
    #[must_use]
    pub fn default_fields(&self) -> FormFields {
        FormFields::defaults_with_location(&self.default_location)
    }
}

/// Zero and unparseable values fall back to `default`.
fn parse_secs(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(default)
}
