//! SessionGuard - Applies the expired-session decision.
//!
//! Controllers for authenticated resources pass every result through
//! [`SessionGuard::guard`]. The decision itself is
//! [`crate::domain::session::check_session`]; the guard only supplies the
//! current location and performs the navigation through the injected
//! [`Navigator`].

use std::sync::Arc;

use crate::domain::session::{check_session_with_login_path, DEFAULT_LOGIN_PATH};
use crate::domain::{ApiError, ApiResult, SessionCheck};
use crate::ports::Navigator;

#[derive(Clone)]
pub struct SessionGuard {
    navigator: Arc<dyn Navigator>,
    login_path: String,
}

impl SessionGuard {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            navigator,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }

    /// Uses a login route other than `/login`.
    pub fn with_login_path(mut self, login_path: impl Into<String>) -> Self {
        self.login_path = login_path.into();
        self
    }

    /// Evaluates `result` without navigating.
    pub fn check<T>(&self, result: &ApiResult<T>) -> SessionCheck {
        // Only a 401 needs the current location.
        if !result.error().is_some_and(ApiError::is_unauthorized) {
            return SessionCheck::Valid;
        }
        check_session_with_login_path(result, &self.navigator.current_location(), &self.login_path)
    }

    /// Navigates to the login screen when `result` is a 401, then returns
    /// `result` unchanged in every case.
    pub fn guard<T>(&self, result: ApiResult<T>) -> ApiResult<T> {
        if let SessionCheck::LoginRequired { redirect_to } = self.check(&result) {
            tracing::info!(target_url = %redirect_to, "Session expired, redirecting to login");
            self.navigator.navigate(&redirect_to);
        }
        result
    }
}
