//! Barhop client - typed access to the bar discovery and outing planning API
//!
//! Every backend call goes through one wrapper that turns the transport
//! outcome into an [`domain::ApiResult`]: success with status and decoded
//! body, or failure with status and a user-facing message. Authenticated
//! calls pass through a session guard that sends the user to the login page
//! when the backend answers 401.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use barhop_client::adapters::{RecordingNavigator, ReqwestTransport};
//! use barhop_client::application::{ApiClient, Controllers, SessionGuard};
//! use barhop_client::config::AppConfig;
//! use barhop_client::domain::foundation::BarId;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let transport = ReqwestTransport::new(config.api.to_transport_config())?;
//! let client = Arc::new(ApiClient::new(Arc::new(transport)));
//! let guard = SessionGuard::new(Arc::new(RecordingNavigator::default()));
//! let api = Controllers::new(client, guard);
//!
//! let bar = api.bars.find_bar_by_id(BarId::new(42)).await;
//! println!("{}", bar.status());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
