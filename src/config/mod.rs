//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `BARHOP` prefix and
//! nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use barhop_client::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Talking to {}", config.api.base_url);
//! ```

mod api;
mod error;
mod logging;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root client configuration
///
/// Every section has defaults, so an empty environment yields a client
/// pointed at `http://localhost:8080/api`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Backend API (base URL, timeout, cookies, error policy, login path)
    #[serde(default)]
    pub api: ApiConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BARHOP` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `BARHOP__API__BASE_URL=https://...` -> `api.base_url`
    /// - `BARHOP__API__TIMEOUT_MS=3000` -> `api.timeout_ms = 3000`
    /// - `BARHOP__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BARHOP")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
