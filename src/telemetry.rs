//! Tracing subscriber setup for binaries.
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! left to whoever owns `main`.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Installs the global `fmt` subscriber.
///
/// `RUST_LOG` overrides the configured directive when set. Calling this twice
/// is harmless: the second install is ignored.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let result = if config.json {
        fmt().json().with_env_filter(filter).try_init()
    } else {
        fmt().with_env_filter(filter).try_init()
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "Tracing subscriber already installed");
    }
}
