//! Payload and credential types for the Customer.io client.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CustomerIoError;

/// Caller-supplied attributes attached to a customer or an event.
///
/// Values may be any JSON value, including nested objects and arrays.
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// JSON body of a tracked event.
///
/// `data` is omitted entirely when no attributes were given, and sent as
/// `{}` when an empty map was given.
#[derive(Debug, Clone, Serialize)]
pub struct EventEnvelope<'a> {
    /// Event name.
    pub name: &'a str,
    /// Event attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a Attributes>,
}

/// Site credentials used for HTTP Basic auth.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    /// Site identifier, sent as the basic auth username.
    pub site_id: String,
    /// Secret API key, sent as the basic auth password.
    pub api_key: String,
}

impl Credentials {
    /// Create credentials from a site ID and API key.
    #[must_use]
    pub fn new(site_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            api_key: api_key.into(),
        }
    }

    /// Load credentials from the named environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerIoError::Configuration`] if either variable is unset or empty.
    pub fn from_env_vars(site_var: &str, key_var: &str) -> Result<Self, CustomerIoError> {
        Ok(Self::new(read_var(site_var)?, read_var(key_var)?))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("site_id", &self.site_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

fn read_var(name: &str) -> Result<String, CustomerIoError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(CustomerIoError::Configuration(format!("{name} must be set"))),
    }
}
