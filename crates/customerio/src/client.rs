//! Customer.io track API client implementation.

use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::error::{CustomerIoError, Result};
use crate::transport::{ApiRequest, Transport};
use crate::types::{Attributes, Credentials, EventEnvelope};

/// Customer.io track API client.
///
/// Holds site credentials and a caller-supplied [`Transport`]. Every
/// operation sends at most one request and keeps no state between calls.
#[derive(Debug, Clone)]
pub struct CustomerIo<T = reqwest::Client> {
    credentials: Credentials,
    transport: T,
}

impl<T: Transport> CustomerIo<T> {
    /// Base URL of the track API.
    pub const BASE_URL: &'static str = "https://track.customer.io/api/v1";

    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `credentials` - Site ID and API key used for basic auth
    /// * `transport` - HTTP sender, e.g. a shared `reqwest::Client` or `&reqwest::Client`
    #[must_use]
    pub fn new(credentials: Credentials, transport: T) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    /// Credentials this client authenticates with.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Create or update a customer.
    ///
    /// `id` is a unique, non-email identifier. A non-empty `email` is stored
    /// under the `email` attribute, replacing any value already there.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `id` is empty, otherwise the request's
    /// transport or API error.
    pub async fn identify(&self, id: &str, email: &str, attrs: Option<Attributes>) -> Result<()> {
        if id.is_empty() {
            return Err(CustomerIoError::ID_REQUIRED);
        }

        let mut attrs = attrs.unwrap_or_default();
        if !email.is_empty() {
            attrs.insert("email".to_string(), Value::String(email.to_string()));
        }

        let body = serde_json::to_vec(&attrs)?;
        self.send(Method::PUT, &format!("/customers/{id}"), Some(body))
            .await
    }

    /// Remove a customer and all of their data.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `id` is empty, otherwise the request's
    /// transport or API error.
    pub async fn delete(&self, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(CustomerIoError::ID_REQUIRED);
        }

        self.send(Method::DELETE, &format!("/customers/{id}"), None)
            .await
    }

    /// Send an event for a customer.
    ///
    /// `None` omits the event data entirely; an empty map is sent as `{}`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `id` is empty, otherwise the request's
    /// transport or API error.
    pub async fn track(&self, id: &str, name: &str, attrs: Option<Attributes>) -> Result<()> {
        if id.is_empty() {
            return Err(CustomerIoError::ID_REQUIRED);
        }

        self.event(&format!("/customers/{id}/events"), name, attrs.as_ref())
            .await
    }

    /// Send an event to an address that is not a known customer.
    ///
    /// `recipient` is stored under the `recipient` attribute.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `attrs` already holds a different
    /// `recipient`, otherwise the request's transport or API error.
    pub async fn track_recipient(
        &self,
        recipient: &str,
        name: &str,
        attrs: Option<Attributes>,
    ) -> Result<()> {
        let mut attrs = attrs.unwrap_or_default();

        if let Some(existing) = attrs.get("recipient") {
            if existing.as_str() != Some(recipient) {
                return Err(CustomerIoError::RECIPIENT_CONFLICT);
            }
        }
        attrs.insert(
            "recipient".to_string(),
            Value::String(recipient.to_string()),
        );

        self.event("/events", name, Some(&attrs)).await
    }

    async fn event(&self, path: &str, name: &str, attrs: Option<&Attributes>) -> Result<()> {
        let envelope = EventEnvelope { name, data: attrs };
        let body = serde_json::to_vec(&envelope)?;
        self.send(Method::POST, path, Some(body)).await
    }

    async fn send(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> Result<()> {
        tracing::debug!(method = %method, path = %path, "Sending customer.io request");

        let request = ApiRequest {
            method,
            url: format!("{}{path}", Self::BASE_URL),
            username: self.credentials.site_id.clone(),
            password: self.credentials.api_key.clone(),
            body,
        };

        let status = self
            .transport
            .execute(request)
            .await
            .map_err(CustomerIoError::Transport)?;

        if status != StatusCode::OK {
            tracing::warn!(path = %path, status = %status, "customer.io request rejected");
            return Err(CustomerIoError::Api { status });
        }

        tracing::debug!(path = %path, status = %status, "customer.io request accepted");
        Ok(())
    }
}
