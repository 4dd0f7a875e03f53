//! Scripted transport shared by the session tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use medmanager_client::{ApiRequest, RawResponse, Transport, TransportError};

enum Scripted {
    Json {
        delay: Duration,
        status: u16,
        body: serde_json::Value,
    },
    Network(String),
}

/// Replays scripted responses in request order, each after its own
/// delay, and records every request it saw.
pub(crate) struct ScriptedTransport {
    responses: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push_json_delayed(Duration::ZERO, status, body);
    }

    pub(crate) fn push_json_delayed(&self, delay: Duration, status: u16, body: serde_json::Value) {
        self.responses.lock().unwrap().push_back(Scripted::Json {
            delay,
            status,
            body,
        });
    }

    pub(crate) fn push_network_error(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Scripted::Network(message.to_string()));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        let scripted = self.responses.lock().unwrap().pop_front();
        match scripted {
            Some(Scripted::Json {
                delay,
                status,
                body,
            }) => {
                tokio::time::sleep(delay).await;
                Ok(RawResponse {
                    status,
                    body: serde_json::to_vec(&body).unwrap(),
                })
            }
            Some(Scripted::Network(message)) => Err(TransportError::Network { message }),
            None => Ok(RawResponse {
                status: 200,
                body: b"{}".to_vec(),
            }),
        }
    }
}
