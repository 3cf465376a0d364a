//! Domain layer: call outcomes, error normalization and resource DTOs.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (typed ids, paging)
//! - `api_result` - Tagged outcome of one API call
//! - `error_policy` - Status and body to user-facing message
//! - `session` - Expired-session detection and login redirect target
//! - `auth`, `bar`, `recommend`, `memo`, `review`, `plan`, `schedule`,
//!   `calendar` - Request and response shapes per backend resource

pub mod api_result;
pub mod auth;
pub mod bar;
pub mod calendar;
pub mod error_policy;
pub mod foundation;
pub mod memo;
pub mod plan;
pub mod recommend;
pub mod review;
pub mod schedule;
pub mod session;

pub use api_result::{ApiError, ApiResult, ErrorKind};
pub use error_policy::ErrorMessagePolicy;
pub use session::SessionCheck;
