#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use crate::backend::{Records, Session};

pub const CHECKED_AUTH: &str = "checkedAuth";
pub const SIGNED_IN: &str = "signedIn";
pub const SIGNED_OUT: &str = "signedOut";
pub const RECORDS_RECEIVED: &str = "receiveRecords";

/// Broadcast by the controller on its typed bus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {
    /// The provider has answered at least once. Always precedes
    /// `SignedIn`/`SignedOut`.
    CheckedAuth,
    SignedIn(Session),
    SignedOut,
    /// Full replacement of the watched collection.
    RecordsReceived(Records),
}

impl AppEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CheckedAuth => CHECKED_AUTH,
            Self::SignedIn(_) => SIGNED_IN,
            Self::SignedOut => SIGNED_OUT,
            Self::RecordsReceived(_) => RECORDS_RECEIVED,
        }
    }

    /// Auth transitions are mirrored onto the named emitter.
    pub fn is_auth(&self) -> bool {
        !matches!(self, Self::RecordsReceived(_))
    }

    /// Events for one provider answer, in broadcast order.
    pub fn for_session(session: Option<Session>) -> [AppEvent; 2] {
        match session {
            Some(session) => [Self::CheckedAuth, Self::SignedIn(session)],
            None => [Self::CheckedAuth, Self::SignedOut],
        }
    }
}
