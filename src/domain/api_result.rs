//! Result type for a single API call.
//!
//! Every call made through the client ends in exactly one [`ApiResult`]:
//! either the decoded payload with its HTTP status, or a normalized
//! [`ApiError`]. Failures are data; callers branch on the variant instead of
//! propagating transport errors.

use std::fmt;

use thiserror::Error;

/// Status used when no HTTP response reached the caller.
pub const NETWORK_ERROR_STATUS: u16 = 0;

/// Status the backend uses for a missing or expired session.
pub const UNAUTHORIZED_STATUS: u16 = 401;

/// Broad family of an [`ApiError`], derived from its status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The server could not be reached (status 0).
    Network,
    /// The server answered 401.
    Unauthenticated,
    /// The server answered with any other non-success status.
    Http,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Network => "NETWORK_UNREACHABLE",
            ErrorKind::Unauthenticated => "UNAUTHENTICATED",
            ErrorKind::Http => "HTTP_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Normalized error record carried by a failed call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{status}] {message}")]
pub struct ApiError {
    /// HTTP status, or `0` when no response was received.
    pub status: u16,
    /// Display-ready message for the user.
    pub message: String,
    /// Error code supplied by the backend, if any.
    pub code: Option<String>,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: None,
        }
    }

    /// Attaches a backend error code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        match self.status {
            NETWORK_ERROR_STATUS => ErrorKind::Network,
            UNAUTHORIZED_STATUS => ErrorKind::Unauthenticated,
            _ => ErrorKind::Http,
        }
    }

    pub fn is_network(&self) -> bool {
        self.kind() == ErrorKind::Network
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind() == ErrorKind::Unauthenticated
    }
}

/// Outcome of one API call.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum ApiResult<T> {
    Success { status: u16, data: T },
    Failure(ApiError),
}

impl<T> ApiResult<T> {
    pub fn ok(data: T, status: u16) -> Self {
        ApiResult::Success { status, data }
    }

    pub fn fail(error: ApiError) -> Self {
        ApiResult::Failure(error)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ApiResult::Success { .. })
    }

    pub fn is_fail(&self) -> bool {
        !self.is_ok()
    }

    /// HTTP status of the outcome (`0` for network failures).
    pub fn status(&self) -> u16 {
        match self {
            ApiResult::Success { status, .. } => *status,
            ApiResult::Failure(error) => error.status,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResult::Success { data, .. } => Some(data),
            ApiResult::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            ApiResult::Success { .. } => None,
            ApiResult::Failure(error) => Some(error),
        }
    }

    /// Transforms the payload of a successful call, keeping its status.
    pub fn map<U, F>(self, f: F) -> ApiResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ApiResult::Success { status, data } => ApiResult::Success {
                status,
                data: f(data),
            },
            ApiResult::Failure(error) => ApiResult::Failure(error),
        }
    }

    /// Converts into a plain `Result`, dropping the success status.
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            ApiResult::Success { data, .. } => Ok(data),
            ApiResult::Failure(error) => Err(error),
        }
    }
}

impl<T> From<ApiResult<T>> for Result<T, ApiError> {
    fn from(result: ApiResult<T>) -> Self {
        result.into_result()
    }
}
