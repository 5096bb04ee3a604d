//! Backend façade: identity provider + document collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller only ever sees [`Backend`]. Auth, persistence, real-time
//! sync and conflict resolution all live behind it; implementations push
//! session changes and collection snapshots through the registered callbacks.
//!
//! ERROR HANDLING
//! ==============
//! Registration failures are returned. Fire-and-forget operations
//! (`sign_in`, `sign_out`, `add_record`) log their failures instead; there is
//! no retry and nothing is surfaced to the user.


#[cfg(feature = "hydrate")]
pub mod firebase;
#[cfg(feature = "hydrate")]
mod firebase_sys;
pub mod memory;
mod types;

pub use types::{Record, Records, Session};

use thiserror::Error;

/// Failures reported by a backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("backend initialization failed: {0}")]
    Init(String),
    #[error("invalid collection `{collection}`: {message}")]
    Collection { collection: String, message: String },
    #[error("subscription failed: {0}")]
    Subscribe(String),
    #[error("value conversion failed: {0}")]
    Convert(String),
}

impl From<serde_json::Error> for BackendError {
    fn from(e: serde_json::Error) -> Self {
        Self::Convert(e.to_string())
    }
}

pub type SessionListener = Box<dyn Fn(Option<Session>)>;
pub type RecordsListener = Box<dyn Fn(Records)>;

/// Cancellation handle for a push registration.
///
/// Cancels exactly once: on [`Subscription::cancel`] or on drop, whichever
/// comes first.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// External auth + document database collaborator.
pub trait Backend: 'static {
    /// Start interactive sign-in. The outcome arrives through the session
    /// listener.
    fn sign_in(&self);

    fn sign_out(&self);

    /// Push the current session now (or as soon as it is known) and on every
    /// later change.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Subscribe`] if the provider rejects the listener.
    fn on_session_change(&self, listener: SessionListener) -> Result<Subscription, BackendError>;

    /// Append `record` to `collection`; the backend assigns the id.
    fn add_record(&self, collection: &str, record: Record);

    /// Push the full contents of `collection` now and after every change,
    /// until the returned handle is cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Collection`] for names the backend rejects.
    fn watch_records(&self, collection: &str, listener: RecordsListener) -> Result<Subscription, BackendError>;
}
