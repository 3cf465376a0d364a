//! Error message normalization.
//!
//! Turns a failed HTTP exchange into an [`ApiError`] whose message can be
//! shown to the user as-is. Known statuses map to fixed messages; everything
//! else gets a generic message. Whether a message supplied by the backend may
//! replace the fixed text is decided by [`ErrorMessagePolicy`].

use serde::Deserialize;
use serde_json::Value;

use super::api_result::{ApiError, NETWORK_ERROR_STATUS};

/// Shown when no response reached the client.
pub const NETWORK_ERROR_MESSAGE: &str = "서버에 연결할 수 없습니다.";

/// Shown for error statuses without a dedicated entry.
pub const GENERIC_ERROR_MESSAGE: &str = "요청 처리 중 오류가 발생했습니다.";

/// Shown when a successful response body does not match the expected shape.
pub const MALFORMED_RESPONSE_MESSAGE: &str = "응답 형식이 올바르지 않습니다.";

/// Source of the message placed in an [`ApiError`] for HTTP failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMessagePolicy {
    /// Fixed message per status; response bodies are ignored.
    #[default]
    StatusTable,
    /// A non-blank `message` from the response body wins over the table.
    PreferBackendMessage,
}

/// Fixed message for a known error status.
pub fn status_message(status: u16) -> Option<&'static str> {
    match status {
        400 => Some("잘못된 요청입니다."),
        401 => Some("로그인 정보가 올바르지 않습니다."),
        403 => Some("접근 권한이 없습니다."),
        404 => Some("요청한 정보를 찾을 수 없습니다."),
        409 => Some("이미 존재하는 데이터입니다."),
        500 => Some("서버 오류가 발생했습니다. 잠시 후 다시 시도해주세요."),
        _ => None,
    }
}

/// Error for a call that never received a response.
pub fn network_error() -> ApiError {
    ApiError::new(NETWORK_ERROR_STATUS, NETWORK_ERROR_MESSAGE)
}

/// Error for a 2xx response whose body could not be decoded.
pub fn malformed_response_error(status: u16) -> ApiError {
    ApiError::new(status, MALFORMED_RESPONSE_MESSAGE)
}

/// Builds the error for a non-success response.
pub fn http_error(status: u16, body: &[u8], policy: ErrorMessagePolicy) -> ApiError {
    let payload = ErrorBody::parse(body);

    let message = match policy {
        ErrorMessagePolicy::PreferBackendMessage => payload
            .message
            .clone()
            .unwrap_or_else(|| table_message(status).to_string()),
        ErrorMessagePolicy::StatusTable => table_message(status).to_string(),
    };

    ApiError {
        status,
        message,
        code: payload.code,
    }
}

fn table_message(status: u16) -> &'static str {
    status_message(status).unwrap_or(GENERIC_ERROR_MESSAGE)
}

/// Fields we read from an error response body.
#[derive(Debug, Default)]
struct ErrorBody {
    message: Option<String>,
    code: Option<String>,
}

impl ErrorBody {
    fn parse(body: &[u8]) -> Self {
        let Ok(Value::Object(object)) = serde_json::from_slice::<Value>(body) else {
            return Self::default();
        };

        let text = |key: &str| {
            object
                .get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Self {
            message: text("message"),
            code: text("code").or_else(|| text("errorCode")),
        }
    }
}
