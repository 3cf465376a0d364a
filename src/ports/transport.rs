//! Transport port - Interface for executing one HTTP exchange.
//!
//! The transport owns connection concerns only: base address, timeout and
//! cookie handling. It reports *any* received response as `Ok`, whatever the
//! status; classifying statuses is the job of
//! [`crate::application::api_call`]. `Err` is reserved for exchanges where no
//! response reached the caller.
//!
//! # Example
//!
//! ```ignore
//! let request = ApiRequest::post("/bars/nearby").json(&payload);
//! let response = transport.execute(request).await?;
//! assert!(response.is_success());
//! ```

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Executes HTTP requests against the backend API.
///
/// Implementations are shared across every controller and must be safe to
/// call concurrently. There is no ordering guarantee between calls.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Performs exactly one attempt; never retries.
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError>;
}

/// HTTP verbs used by the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON request body.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    /// The payload could not be encoded; transports refuse to send it.
    Unencodable(String),
}

/// One request, relative to the transport's base address.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path below the API base, starting with `/`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Sets a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.body = Some(match serde_json::to_value(body) {
            Ok(value) => RequestBody::Json(value),
            Err(e) => RequestBody::Unencodable(e.to_string()),
        });
        self
    }

    /// Appends a query parameter.
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Appends a query parameter only when `value` is present.
    pub fn query_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// The JSON body, if any.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Encode` when the payload could not be encoded.
    pub fn json_body(&self) -> Result<Option<&Value>, TransportError> {
        match &self.body {
            None => Ok(None),
            Some(RequestBody::Json(value)) => Ok(Some(value)),
            Some(RequestBody::Unencodable(reason)) => Err(TransportError::Encode(reason.clone())),
        }
    }
}

/// A response as received, before status classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A response with a JSON body.
    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, body.to_string())
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures where no usable response reached the caller.
///
/// The contained strings are diagnostics for logs; they are never shown to
/// users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("Failed to encode request body: {0}")]
    Encode(String),
}
