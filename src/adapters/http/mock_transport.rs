//! Mock transport for testing.
//!
//! Provides a scripted implementation of the `HttpTransport` port so the
//! client and controllers can be exercised without a backend.
//!
//! # Example
//!
//! ```ignore
//! let transport = MockTransport::new()
//!     .with_json(200, json!({ "id": 42, "name": "Bar X" }))
//!     .with_error(TransportError::Connect("dns".into()));
//!
//! let client = ApiClient::new(Arc::new(transport.clone()));
//! // ... make calls ...
//! assert_eq!(transport.calls()[0].path, "/bars/42");
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::time::sleep;

use crate::ports::{ApiRequest, HttpTransport, RawResponse, TransportError};

/// A scripted reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    Response(RawResponse),
    Error(TransportError),
}

/// Mock transport. Replies are consumed in order; once the script runs out
/// every call gets an empty `200`.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<ApiRequest>>>,
    delay: Duration,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a raw response.
    pub fn with_response(self, response: RawResponse) -> Self {
        lock(&self.replies).push_back(MockReply::Response(response));
        self
    }

    /// Queues a response with a JSON body.
    pub fn with_json(self, status: u16, body: Value) -> Self {
        self.with_response(RawResponse::json(status, &body))
    }

    /// Queues a response with an empty body.
    pub fn with_status(self, status: u16) -> Self {
        self.with_response(RawResponse::new(status, Vec::new()))
    }

    /// Queues a failure where no response arrives.
    pub fn with_error(self, error: TransportError) -> Self {
        lock(&self.replies).push_back(MockReply::Error(error));
        self
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Requests received so far, in arrival order.
    pub fn calls(&self) -> Vec<ApiRequest> {
        lock(&self.calls).clone()
    }

    /// The most recent request, if any.
    pub fn last_call(&self) -> Option<ApiRequest> {
        lock(&self.calls).last().cloned()
    }

    fn next_reply(&self) -> MockReply {
        lock(&self.replies)
            .pop_front()
            .unwrap_or_else(|| MockReply::Response(RawResponse::new(200, Vec::new())))
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        lock(&self.calls).push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_reply() {
            MockReply::Response(response) => Ok(response),
            MockReply::Error(error) => Err(error),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
