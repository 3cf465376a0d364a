//! The call wrapper: one transport call in, one [`ApiResult`] out.
//!
//! ```text
//! transport Ok(2xx)        -> Success { status, data: body decoded as T }
//! transport Ok(non-2xx)    -> Failure { status, message per policy, code from body }
//! transport Err(_)         -> Failure { status: 0, "서버에 연결할 수 없습니다." }
//! ```
//!
//! There is no retry; each call is a single attempt bounded by the
//! transport's timeout.

use std::future::Future;
use std::sync::Arc;

use serde::de::{DeserializeOwned, IgnoredAny};

use crate::domain::error_policy::{http_error, malformed_response_error, network_error};
use crate::domain::{ApiResult, ErrorMessagePolicy};
use crate::ports::{ApiRequest, HttpTransport, RawResponse, TransportError};

/// Runs `call` once and normalizes its outcome with the default policy.
pub async fn api_call<T, F, Fut>(call: F) -> ApiResult<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<RawResponse, TransportError>>,
{
    api_call_with_policy(ErrorMessagePolicy::default(), call).await
}

/// Runs `call` once and normalizes its outcome with `policy`.
pub async fn api_call_with_policy<T, F, Fut>(policy: ErrorMessagePolicy, call: F) -> ApiResult<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<RawResponse, TransportError>>,
{
    match call().await {
        Ok(response) => classify_response(response, policy),
        Err(error) => {
            tracing::warn!(error = %error, "API call failed without a response");
            ApiResult::fail(network_error())
        }
    }
}

/// Classifies a received response by status and decodes successful bodies.
pub fn classify_response<T: DeserializeOwned>(
    response: RawResponse,
    policy: ErrorMessagePolicy,
) -> ApiResult<T> {
    let status = response.status;

    if !response.is_success() {
        let error = http_error(status, &response.body, policy);
        tracing::debug!(status, code = ?error.code, "API call returned an error status");
        return ApiResult::fail(error);
    }

    match decode_body(&response.body) {
        Ok(data) => ApiResult::ok(data, status),
        Err(e) => {
            tracing::warn!(status, error = %e, "Response body did not match the expected shape");
            ApiResult::fail(malformed_response_error(status))
        }
    }
}

/// An empty body decodes as JSON `null` so `()` and `Option<_>` payloads work.
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> serde_json::Result<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice(b"null")
    } else {
        serde_json::from_slice(body)
    }
}

/// Shared entry point the controllers call through.
///
/// Holds the single transport instance, configured once at startup, and the
/// message policy. Cheap to share behind an `Arc`.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    policy: ErrorMessagePolicy,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            policy: ErrorMessagePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ErrorMessagePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ErrorMessagePolicy {
        self.policy
    }

    /// Executes `request` and decodes a successful body as `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        tracing::debug!(method = %request.method, path = %request.path, "API call");
        api_call_with_policy(self.policy, || self.transport.execute(request)).await
    }

    /// Executes `request` for endpoints whose success body carries nothing
    /// the caller needs. Whatever the body holds is accepted.
    pub async fn send_unit(&self, request: ApiRequest) -> ApiResult<()> {
        self.send::<IgnoredAny>(request).await.map(|_| ())
    }
}
