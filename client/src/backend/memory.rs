//! In-process backend.
//!
//! Signs in as a fixed identity and keeps collections in memory. Session and
//! collection listeners are called synchronously: once on registration and
//! again after every change, mirroring the push contract of the hosted
//! backend without a network.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use uuid::Uuid;

use super::{Backend, BackendError, Record, Records, RecordsListener, Session, SessionListener, Subscription};

struct Watcher {
    id: u64,
    collection: String,
    listener: Rc<dyn Fn(Records)>,
}

#[derive(Default)]
struct Inner {
    next_id: Cell<u64>,
    session: RefCell<Option<Session>>,
    session_listeners: RefCell<Vec<(u64, Rc<dyn Fn(Option<Session>)>)>>,
    collections: RefCell<HashMap<String, Records>>,
    watchers: RefCell<Vec<Watcher>>,
}

impl Inner {
    fn next_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn snapshot(&self, collection: &str) -> Records {
        self.collections.borrow().get(collection).cloned().unwrap_or_default()
    }

    fn set_session(&self, session: Option<Session>) {
        *self.session.borrow_mut() = session.clone();
        let listeners: Vec<_> = self
            .session_listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(session.clone());
        }
    }

    fn notify_watchers(&self, collection: &str) {
        let snapshot = self.snapshot(collection);
        let listeners: Vec<_> = self
            .watchers
            .borrow()
            .iter()
            .filter(|w| w.collection == collection)
            .map(|w| w.listener.clone())
            .collect();
        for listener in listeners {
            listener(snapshot.clone());
        }
    }
}

/// Backend that never leaves the page.
pub struct MemoryBackend {
    user: Session,
    inner: Rc<Inner>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::with_user(Session {
            uid: "local-user".to_owned(),
            display_name: Some("Local User".to_owned()),
            email: None,
        })
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose `sign_in` yields `user`.
    pub fn with_user(user: Session) -> Self {
        Self {
            user,
            inner: Rc::new(Inner::default()),
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.inner.session.borrow().clone()
    }

    pub fn records(&self, collection: &str) -> Records {
        self.inner.snapshot(collection)
    }

    /// Write `record` under a caller-chosen id, creating or replacing it.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Collection`] for invalid collection names.
    pub fn put_record(&self, collection: &str, id: &str, record: Record) -> Result<(), BackendError> {
        validate_collection(collection)?;
        self.inner
            .collections
            .borrow_mut()
            .entry(collection.to_owned())
            .or_default()
            .insert(id, record);
        self.inner.notify_watchers(collection);
        Ok(())
    }

    pub fn watcher_count(&self, collection: &str) -> usize {
        self.inner
            .watchers
            .borrow()
            .iter()
            .filter(|w| w.collection == collection)
            .count()
    }

    pub fn session_listener_count(&self) -> usize {
        self.inner.session_listeners.borrow().len()
    }
}

impl Backend for MemoryBackend {
    fn sign_in(&self) {
        log::debug!("memory backend: sign in as {}", self.user.uid);
        self.inner.set_session(Some(self.user.clone()));
    }

    fn sign_out(&self) {
        log::debug!("memory backend: sign out");
        self.inner.set_session(None);
    }

    fn on_session_change(&self, listener: SessionListener) -> Result<Subscription, BackendError> {
        let id = self.inner.next_id();
        let listener: Rc<dyn Fn(Option<Session>)> = Rc::from(listener);
        self.inner.session_listeners.borrow_mut().push((id, listener.clone()));
        listener(self.session());

        let inner = Rc::downgrade(&self.inner);
        Ok(Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.session_listeners.borrow_mut().retain(|(existing, _)| *existing != id);
            }
        }))
    }

    fn add_record(&self, collection: &str, record: Record) {
        let id = Uuid::new_v4().to_string();
        if let Err(e) = self.put_record(collection, &id, record) {
            log::warn!("memory backend: add record failed: {e}");
        }
    }

    fn watch_records(&self, collection: &str, listener: RecordsListener) -> Result<Subscription, BackendError> {
        validate_collection(collection)?;
        let id = self.inner.next_id();
        let listener: Rc<dyn Fn(Records)> = Rc::from(listener);
        self.inner.watchers.borrow_mut().push(Watcher {
            id,
            collection: collection.to_owned(),
            listener: listener.clone(),
        });
        listener(self.inner.snapshot(collection));

        Ok(Subscription::new(unwatch(Rc::downgrade(&self.inner), id)))
    }
}

fn unwatch(inner: Weak<Inner>, id: u64) -> impl FnOnce() {
    move || {
        if let Some(inner) = inner.upgrade() {
            inner.watchers.borrow_mut().retain(|w| w.id != id);
        }
    }
}

/// Top-level collection names: non-empty, no path separators.
fn validate_collection(collection: &str) -> Result<(), BackendError> {
    if collection.is_empty() || collection.contains('/') {
        return Err(BackendError::Collection {
            collection: collection.to_owned(),
            message: "expected a single non-empty path segment".to_owned(),
        });
    }
    Ok(())
}
