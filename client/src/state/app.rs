#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::backend::{Records, Session};

/// Everything the controller knows about the current page.
///
/// `records` stays empty until the first snapshot after sign-in and is
/// emptied again on sign-out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub session: Option<Session>,
    pub checked_auth: bool,
    pub records: Records,
}

impl AppState {
    /// Record the provider's latest answer; replaces any previous session.
    pub fn apply_session(&mut self, session: Option<Session>) {
        self.session = session;
        self.checked_auth = true;
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn clear_records(&mut self) {
        self.records = Records::default();
    }
}
