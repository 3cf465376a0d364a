//! HTTP transport adapters.
//!
//! Implementations of the `HttpTransport` port:
//!
//! - `ReqwestTransport` - Real HTTP with a cookie store and fixed timeout
//! - `MockTransport` - Scripted replies and call recording for tests

mod mock_transport;
mod reqwest_transport;

pub use mock_transport::{MockReply, MockTransport};
pub use reqwest_transport::{ReqwestTransport, TransportBuildError, TransportConfig};
