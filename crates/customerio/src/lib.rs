//! Customer.io track API client.
//!
//! This crate identifies customers and records events against the
//! [Customer.io](https://customer.io) track API. Each operation sends exactly
//! one authenticated request and maps the response status to a result.
//!
//! # Example
//!
//! ```no_run
//! use customerio::{Attributes, Credentials, CustomerIo};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), customerio::CustomerIoError> {
//! let http = reqwest::Client::new();
//! let client = CustomerIo::new(Credentials::new("site-id", "api-key"), &http);
//!
//! let mut attrs = Attributes::new();
//! attrs.insert("plan".to_string(), json!("pro"));
//!
//! client.identify("user-42", "user@example.com", Some(attrs)).await?;
//! client.track("user-42", "signed_up", None).await?;
//! client.track_recipient("friend@example.com", "invited", None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! When tracking is turned off, hold an `Option<CustomerIo>` or a
//! [`DisabledTracker`] behind the [`Tracker`] trait; every call then
//! succeeds without sending anything.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod tracker;
mod transport;
mod types;

#[cfg(test)]
mod test_support;

pub use client::CustomerIo;
pub use error::{BoxError, CustomerIoError, Result};
pub use tracker::{DisabledTracker, Tracker};
pub use transport::{ApiRequest, Transport};
pub use types::{Attributes, Credentials, EventEnvelope};
