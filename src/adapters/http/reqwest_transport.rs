//! Reqwest-backed transport adapter.
//!
//! Owns transport details only: base address, per-call timeout, the cookie
//! store that carries the session, and mapping reqwest failures onto
//! [`TransportError`]. Status codes are passed through untouched.
//!
//! # Configuration
//!
//! ```ignore
//! let transport = ReqwestTransport::new(
//!     TransportConfig::new("http://localhost:8080/api")
//!         .with_timeout(Duration::from_millis(5000)),
//! )?;
//! let client = ApiClient::new(Arc::new(transport));
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use thiserror::Error;

use crate::ports::{ApiRequest, HttpMethod, HttpTransport, RawResponse, TransportError};

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);
const DEFAULT_USER_AGENT: &str = concat!("barhop-client/", env!("CARGO_PKG_VERSION"));

/// Settings fixed at construction; the transport never changes them later.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// API root, e.g. `http://localhost:8080/api`.
    pub base_url: String,
    /// Overall per-call timeout (connect + response + body).
    pub timeout: Duration,
    /// Keep cookies from responses and send them with later requests.
    pub with_credentials: bool,
    pub user_agent: String,
}

impl TransportConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_credentials(mut self, with_credentials: bool) -> Self {
        self.with_credentials = with_credentials;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            with_credentials: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Errors constructing a [`ReqwestTransport`].
#[derive(Debug, Error)]
pub enum TransportBuildError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Transport that performs real HTTP calls with a shared reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
}

impl ReqwestTransport {
    /// Builds the transport.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL is not an absolute http(s) URL or
    /// when the reqwest client cannot be constructed.
    pub fn new(config: TransportConfig) -> Result<Self, TransportBuildError> {
        let base_url = parse_base_url(&config.base_url)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .cookie_store(config.with_credentials)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins `path` below the base URL, keeping the base's own path segment.
    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let url = self.url_for(&request.path);
        tracing::debug!(method = %request.method, url = %url, "Sending API request");

        let mut builder = self.client.request(to_reqwest_method(request.method), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = request.json_body()? {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        tracing::debug!(status, bytes = body.len(), url = %url, "Received API response");

        Ok(RawResponse::new(status, body.to_vec()))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, TransportBuildError> {
    let url = Url::parse(raw).map_err(|e| TransportBuildError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(TransportBuildError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url)
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn map_transport_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout(error.to_string())
    } else if error.is_connect() {
        TransportError::Connect(error.to_string())
    } else {
        TransportError::Request(error.to_string())
    }
}
