//! Tracking capability shared by the live client and the disabled mode.
//!
//! Code that tracks unconditionally can hold a `Box<dyn Tracker>`, an
//! `Option<CustomerIo>` or a [`DisabledTracker`] and call the same four
//! operations without checking whether tracking is configured.

use async_trait::async_trait;

use crate::client::CustomerIo;
use crate::error::Result;
use crate::transport::Transport;
use crate::types::Attributes;

/// The four track API operations.
#[async_trait]
pub trait Tracker: Send + Sync {
    /// See [`CustomerIo::identify`].
    ///
    /// # Errors
    ///
    /// Returns the implementation's validation, transport or API error.
    async fn identify(&self, id: &str, email: &str, attrs: Option<Attributes>) -> Result<()>;

    /// See [`CustomerIo::delete`].
    ///
    /// # Errors
    ///
    /// Returns the implementation's validation, transport or API error.
    async fn delete(&self, id: &str) -> Result<()>;

    /// See [`CustomerIo::track`].
    ///
    /// # Errors
    ///
    /// Returns the implementation's validation, transport or API error.
    async fn track(&self, id: &str, name: &str, attrs: Option<Attributes>) -> Result<()>;

    /// See [`CustomerIo::track_recipient`].
    ///
    /// # Errors
    ///
    /// Returns the implementation's validation, transport or API error.
    async fn track_recipient(
        &self,
        recipient: &str,
        name: &str,
        attrs: Option<Attributes>,
    ) -> Result<()>;
}

#[async_trait]
impl<T: Transport> Tracker for CustomerIo<T> {
    async fn identify(&self, id: &str, email: &str, attrs: Option<Attributes>) -> Result<()> {
        CustomerIo::identify(self, id, email, attrs).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        CustomerIo::delete(self, id).await
    }

    async fn track(&self, id: &str, name: &str, attrs: Option<Attributes>) -> Result<()> {
        CustomerIo::track(self, id, name, attrs).await
    }

    async fn track_recipient(
        &self,
        recipient: &str,
        name: &str,
        attrs: Option<Attributes>,
    ) -> Result<()> {
        CustomerIo::track_recipient(self, recipient, name, attrs).await
    }
}

/// Tracker used when tracking is turned off.
///
/// Every operation succeeds immediately. Arguments are not validated and no
/// request is sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledTracker;

#[async_trait]
impl Tracker for DisabledTracker {
    async fn identify(&self, id: &str, _email: &str, _attrs: Option<Attributes>) -> Result<()> {
        tracing::trace!(id = %id, "Tracking disabled, skipping identify");
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        tracing::trace!(id = %id, "Tracking disabled, skipping delete");
        Ok(())
    }

    async fn track(&self, id: &str, name: &str, _attrs: Option<Attributes>) -> Result<()> {
        tracing::trace!(id = %id, event = %name, "Tracking disabled, skipping event");
        Ok(())
    }

    async fn track_recipient(
        &self,
        _recipient: &str,
        name: &str,
        _attrs: Option<Attributes>,
    ) -> Result<()> {
        tracing::trace!(event = %name, "Tracking disabled, skipping recipient event");
        Ok(())
    }
}

/// `None` behaves like [`DisabledTracker`].
#[async_trait]
impl<C: Tracker> Tracker for Option<C> {
    async fn identify(&self, id: &str, email: &str, attrs: Option<Attributes>) -> Result<()> {
        match self {
            Some(tracker) => tracker.identify(id, email, attrs).await,
            None => DisabledTracker.identify(id, email, attrs).await,
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        match self {
            Some(tracker) => tracker.delete(id).await,
            None => DisabledTracker.delete(id).await,
        }
    }

    async fn track(&self, id: &str, name: &str, attrs: Option<Attributes>) -> Result<()> {
        match self {
            Some(tracker) => tracker.track(id, name, attrs).await,
            None => DisabledTracker.track(id, name, attrs).await,
        }
    }

    async fn track_recipient(
        &self,
        recipient: &str,
        name: &str,
        attrs: Option<Attributes>,
    ) -> Result<()> {
        match self {
            Some(tracker) => tracker.track_recipient(recipient, name, attrs).await,
            None => {
                DisabledTracker
                    .track_recipient(recipient, name, attrs)
                    .await
            }
        }
    }
}
