//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! client core and its environment. Adapters implement these ports.
//!
//! - `HttpTransport` - Executes one HTTP exchange with the backend
//! - `Navigator` - Reads the current screen and performs full navigations

mod navigator;
mod transport;

pub use navigator::Navigator;
pub use transport::{
    ApiRequest, HttpMethod, HttpTransport, RawResponse, RequestBody, TransportError,
};
