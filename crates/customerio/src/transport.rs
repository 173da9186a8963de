//! Injectable HTTP transport.
//!
//! The client builds an [`ApiRequest`] and hands it to a [`Transport`], which
//! performs the round trip and reports the response status. Connection
//! pooling, timeouts and TLS all belong to the transport; the client adds
//! none of its own.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{header, Method, StatusCode};

use crate::error::BoxError;

/// A fully built request to the Customer.io API.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL.
    pub url: String,
    /// Basic auth username (site ID).
    pub username: String,
    /// Basic auth password (API key).
    pub password: String,
    /// JSON body, if any.
    pub body: Option<Vec<u8>>,
}

/// Sends [`ApiRequest`]s and reports the response status.
///
/// Implementations must not retry and must not interpret the status; the
/// client maps it to a result.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one request.
    ///
    /// # Errors
    ///
    /// Returns the transport's own error if no response was received.
    async fn execute(&self, request: ApiRequest) -> Result<StatusCode, BoxError>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn execute(&self, request: ApiRequest) -> Result<StatusCode, BoxError> {
        let mut builder = self
            .request(request.method, &request.url)
            .basic_auth(request.username, Some(request.password));

        if let Some(body) = request.body {
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = builder.send().await?;
        Ok(response.status())
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn execute(&self, request: ApiRequest) -> Result<StatusCode, BoxError> {
        (**self).execute(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: ApiRequest) -> Result<StatusCode, BoxError> {
        (**self).execute(request).await
    }
}
