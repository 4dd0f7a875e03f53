//! In-memory transport fake shared by the unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::transport::{ApiRequest, RawResponse, Transport, TransportError};

/// Scripted [`Transport`] that records every request it receives.
///
/// Responses are served in push order; once the script is exhausted it
/// answers `200 {}`.
#[derive(Default)]
pub(crate) struct FakeTransport {
    responses: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queues a JSON response with the given status.
    pub(crate) fn push_json(&self, status: u16, body: serde_json::Value) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(RawResponse {
                status,
                body: body.to_string().into_bytes(),
            }));
    }

    /// Queues a connection-level failure.
    pub(crate) fn push_network_error(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError::Network {
                message: message.to_string(),
            }));
    }

    /// Requests observed so far.
    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(RawResponse {
                    status: 200,
                    body: b"{}".to_vec(),
                })
            })
    }
}
