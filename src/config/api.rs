//! Backend API configuration

use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::http::TransportConfig;
use crate::domain::session::DEFAULT_LOGIN_PATH;
use crate::domain::ErrorMessagePolicy;

const MAX_TIMEOUT_MS: u64 = 60_000;

/// Backend API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// API root every request path is joined to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-call timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Keep the session cookie and send it on every call
    #[serde(default = "default_with_credentials")]
    pub with_credentials: bool,

    /// Where failure messages come from
    #[serde(default)]
    pub error_policy: ErrorMessagePolicy,

    /// Navigation target on an expired session
    #[serde(default = "default_login_path")]
    pub login_path: String,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Transport settings derived from this section.
    pub fn to_transport_config(&self) -> TransportConfig {
        TransportConfig::new(self.base_url.clone())
            .with_timeout(self.timeout())
            .with_credentials(self.with_credentials)
    }

    /// Validate API configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
            _ => return Err(ValidationError::InvalidBaseUrl(self.base_url.clone())),
        }
        if self.timeout_ms == 0 || self.timeout_ms > MAX_TIMEOUT_MS {
            return Err(ValidationError::InvalidTimeout(self.timeout_ms));
        }
        if !self.login_path.starts_with('/') {
            return Err(ValidationError::InvalidLoginPath(self.login_path.clone()));
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            with_credentials: default_with_credentials(),
            error_policy: ErrorMessagePolicy::default(),
            login_path: default_login_path(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_with_credentials() -> bool {
    true
}

fn default_login_path() -> String {
    DEFAULT_LOGIN_PATH.to_string()
}
