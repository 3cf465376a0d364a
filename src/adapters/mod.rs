//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the client core to its environment:
//! - `http` - Transports (reqwest, scripted mock)
//! - `navigation` - Navigators (in-memory recorder)

pub mod http;
pub mod navigation;

pub use http::{MockTransport, ReqwestTransport, TransportConfig};
pub use navigation::RecordingNavigator;
