//! Application layer - the call wrapper, session guard, and resource controllers.
//!
//! Controllers turn typed inputs into [`crate::ports::ApiRequest`]s, send them
//! through [`ApiClient`], and hand back [`crate::domain::ApiResult`]s. The
//! [`SessionGuard`] is the one place that reacts to an expired session.

mod api_call;
pub mod controllers;
mod session_guard;

pub use api_call::{api_call, api_call_with_policy, classify_response, ApiClient};
pub use controllers::Controllers;
pub use session_guard::SessionGuard;
