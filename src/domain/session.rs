//! Session expiry detection.
//!
//! A 401 from any authenticated endpoint means the session cookie is gone or
//! expired. This module only *decides* that the user must log in again and
//! where to send them; performing the navigation is left to
//! [`crate::application::SessionGuard`].

use super::api_result::{ApiResult, UNAUTHORIZED_STATUS};

/// Default client-side route of the login screen.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Query parameter carrying the post-login return target.
pub const REDIRECT_PARAM: &str = "redirect";

/// Verdict on whether a call result requires a fresh login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCheck {
    /// Nothing to do; hand the result to the caller.
    Valid,
    /// The session is gone; navigate to `redirect_to`.
    LoginRequired { redirect_to: String },
}

impl SessionCheck {
    pub fn requires_login(&self) -> bool {
        matches!(self, SessionCheck::LoginRequired { .. })
    }
}

/// Inspects `result` for an expired session.
///
/// `current_location` is the path plus query string the user is on; it
/// becomes the return target after login.
pub fn check_session<T>(result: &ApiResult<T>, current_location: &str) -> SessionCheck {
    check_session_with_login_path(result, current_location, DEFAULT_LOGIN_PATH)
}

/// Like [`check_session`], with a custom login route.
pub fn check_session_with_login_path<T>(
    result: &ApiResult<T>,
    current_location: &str,
    login_path: &str,
) -> SessionCheck {
    match result {
        ApiResult::Failure(error) if error.status == UNAUTHORIZED_STATUS => {
            SessionCheck::LoginRequired {
                redirect_to: login_redirect_url(login_path, current_location),
            }
        }
        _ => SessionCheck::Valid,
    }
}

/// `"{login_path}?redirect=<percent-encoded current location>"`.
pub fn login_redirect_url(login_path: &str, current_location: &str) -> String {
    format!(
        "{}?{}={}",
        login_path,
        REDIRECT_PARAM,
        urlencoding::encode(current_location)
    )
}
