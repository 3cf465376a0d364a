//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("API base URL must be an absolute http(s) URL: {0}")]
    InvalidBaseUrl(String),

    #[error("API timeout must be between 1 and 60000 ms, got {0}")]
    InvalidTimeout(u64),

    #[error("Login path must start with '/': {0}")]
    InvalidLoginPath(String),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
