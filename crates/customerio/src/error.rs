//! Client error types.

use reqwest::StatusCode;

/// Boxed error returned by a [`Transport`](crate::Transport).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for Customer.io operations.
pub type Result<T> = std::result::Result<T, CustomerIoError>;

/// Errors that can occur when using the Customer.io client.
#[derive(Debug, thiserror::Error)]
pub enum CustomerIoError {
    /// A required argument was missing or would be clobbered.
    ///
    /// Raised before any request is sent.
    #[error("{0}")]
    Validation(&'static str),

    /// The API answered with a status other than 200.
    #[error(
        "customer.io API returned {} {}",
        .status.as_u16(),
        .status.canonical_reason().unwrap_or_default()
    )]
    Api {
        /// HTTP status code.
        status: StatusCode,
    },

    /// The transport failed before a response was received.
    #[error(transparent)]
    Transport(BoxError),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl CustomerIoError {
    pub(crate) const ID_REQUIRED: Self = Self::Validation("id is required");
    pub(crate) const RECIPIENT_CONFLICT: Self =
        Self::Validation("recipient would be overwritten in attrs");

    /// HTTP status of an [`Api`](Self::Api) error.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status } => Some(*status),
            _ => None,
        }
    }

    /// Whether the error was raised locally, before any request.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
