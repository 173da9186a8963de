//! In-memory transport for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::BoxError;
use crate::transport::{ApiRequest, Transport};

/// Records every request and answers with a fixed status.
pub(crate) struct RecordingTransport {
    status: StatusCode,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub(crate) fn ok() -> Self {
        Self::with_status(StatusCode::OK)
    }

    pub(crate) fn with_status(status: StatusCode) -> Self {
        Self {
            status,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Parsed JSON body of the only recorded request.
    pub(crate) fn single_body(&self) -> serde_json::Value {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        let body = requests[0].body.as_ref().expect("request has no body");
        serde_json::from_slice(body).unwrap()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: ApiRequest) -> Result<StatusCode, BoxError> {
        self.requests.lock().unwrap().push(request);
        Ok(self.status)
    }
}

/// Fails every request with a connection error.
pub(crate) struct FailingTransport;

#[async_trait]
impl Transport for FailingTransport {
    async fn execute(&self, _request: ApiRequest) -> Result<StatusCode, BoxError> {
        Err(Box::new(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}
