//! Application controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend pushes session changes; the controller turns each one into
//! `CheckedAuth` followed by `SignedIn` or `SignedOut` on its typed bus, and
//! independent listeners react to those signals:
//!
//! - `SignedOut` → root shows only the sign-in control
//! - `SignedIn` → root shows app marker, sign-out, record list, record form
//! - `SignedIn` → live subscription to the records collection
//! - `SignedOut` → live subscription cancelled, records emptied
//! - `RecordsReceived` → state replaced, list re-rendered
//!
//! RESOURCES
//! =========
//! At most one live subscription exists; it sits in an owned slot that the
//! single permanent `SignedOut` listener empties, so sign-in/sign-out cycles
//! do not accumulate listeners. Listeners hold `Weak` references back to the
//! controller, so dropping [`App`] detaches everything.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use crate::backend::{Backend, Records, Session, Subscription};
use crate::dom::{Document, DomError, Element, el};
use crate::pubsub::{Emitter, EventBus, Observable};
use crate::state::app::AppState;
use crate::state::events::AppEvent;
use crate::views::{AuthControls, RecordList, record_form};
use crate::ClientError;

/// Id of the container the app renders into.
pub const ROOT_ID: &str = "root";
pub const LOADING_TEXT: &str = "loading";

/// Elements attached while signed in. Dropped on the next transition.
struct SignedInView<E> {
    list: RecordList<E>,
    // Holds the submit listener.
    _form: E,
}

struct Inner<D: Document, B: Backend> {
    this: Weak<Self>,
    document: D,
    backend: Rc<B>,
    collection: String,
    root: D::Element,
    controls: AuthControls<D::Element>,
    bus: EventBus<AppEvent>,
    auth_events: Emitter,
    session: Observable<Option<Session>>,
    state: RefCell<AppState>,
    view: RefCell<Option<SignedInView<D::Element>>>,
    live: RefCell<Option<Subscription>>,
    auth_watch: RefCell<Option<Subscription>>,
}

/// Running application bound to one root container.
pub struct App<D: Document, B: Backend> {
    inner: Rc<Inner<D, B>>,
}

impl<D: Document, B: Backend> App<D, B> {
    /// Render the loading placeholder, wire the listeners, and start
    /// listening for session changes.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::MissingRoot`] when the document has no `#root`,
    /// or any host/backend failure hit while wiring.
    pub fn start(document: D, backend: Rc<B>, collection: impl Into<String>) -> Result<Self, ClientError> {
        let root = document
            .element_by_id(ROOT_ID)
            .ok_or_else(|| DomError::MissingRoot(ROOT_ID.to_owned()))?;
        root.append_child(&el(&document, "div", &[], Some(LOADING_TEXT))?)?;
        let controls = AuthControls::build(&document, &backend)?;

        let inner = Rc::new_cyclic(|this| Inner {
            this: this.clone(),
            document,
            backend,
            collection: collection.into(),
            root,
            controls,
            bus: EventBus::new(),
            auth_events: Emitter::new(),
            session: Observable::new(None),
            state: RefCell::new(AppState::default()),
            view: RefCell::new(None),
            live: RefCell::new(None),
            auth_watch: RefCell::new(None),
        });
        inner.install_listeners();

        let this = Rc::downgrade(&inner);
        let watch = inner.backend.on_session_change(Box::new(move |session: Option<Session>| {
            if let Some(inner) = this.upgrade() {
                inner.handle_session_change(session);
            }
        }))?;
        *inner.auth_watch.borrow_mut() = Some(watch);

        Ok(Self { inner })
    }

    pub fn state(&self) -> Ref<'_, AppState> {
        self.inner.state.borrow()
    }

    pub fn root(&self) -> &D::Element {
        &self.inner.root
    }

    pub fn controls(&self) -> &AuthControls<D::Element> {
        &self.inner.controls
    }

    /// Typed broadcast of every controller event.
    pub fn events(&self) -> &EventBus<AppEvent> {
        &self.inner.bus
    }

    /// `checkedAuth` / `signedIn` / `signedOut` mirrored by name.
    pub fn auth_events(&self) -> &Emitter {
        &self.inner.auth_events
    }

    /// Latest session, notified on every provider answer.
    pub fn session(&self) -> &Observable<Option<Session>> {
        &self.inner.session
    }

    pub fn has_live_subscription(&self) -> bool {
        self.inner.live.borrow().is_some()
    }
}

impl<D: Document, B: Backend> Inner<D, B> {
    fn install_listeners(&self) {
        self.listen(|_, event| {
            if matches!(event, AppEvent::CheckedAuth) {
                log::info!("checked auth");
            }
        });
        self.listen(|inner, event| match event {
            AppEvent::SignedIn(_) => inner.render_signed_in(),
            AppEvent::SignedOut => inner.render_signed_out(),
            _ => {}
        });
        self.listen(|inner, event| match event {
            AppEvent::SignedIn(_) => inner.start_live_updates(),
            AppEvent::SignedOut => inner.stop_live_updates(),
            _ => {}
        });
        self.listen(|inner, event| {
            if let AppEvent::RecordsReceived(records) = event {
                inner.receive_records(records);
            }
        });
    }

    fn listen(&self, reaction: impl Fn(&Self, &AppEvent) + 'static) {
        let this = self.this.clone();
        self.bus.subscribe(move |event| {
            if let Some(inner) = this.upgrade() {
                reaction(&*inner, event);
            }
        });
    }

    fn broadcast(&self, event: &AppEvent) {
        log::debug!("broadcast {}", event.name());
        self.bus.publish(event);
        if event.is_auth() {
            self.auth_events.emit(event.name());
        }
    }

    fn handle_session_change(&self, session: Option<Session>) {
        self.state.borrow_mut().apply_session(session.clone());
        self.session.set(session.clone());
        for event in AppEvent::for_session(session) {
            self.broadcast(&event);
        }
    }

    fn render_signed_out(&self) {
        self.view.borrow_mut().take();
        self.root.clear_children();
        if let Err(e) = self.root.append_child(&self.controls.sign_in) {
            log::warn!("render signed-out view: {e}");
        }
    }

    fn render_signed_in(&self) {
        self.view.borrow_mut().take();
        self.root.clear_children();
        match self.build_signed_in_view() {
            Ok(view) => *self.view.borrow_mut() = Some(view),
            Err(e) => log::warn!("render signed-in view: {e}"),
        }
    }

    fn build_signed_in_view(&self) -> Result<SignedInView<D::Element>, DomError> {
        let list = RecordList::new(&self.document)?;
        list.render(&self.document, &self.state.borrow().records)?;

        let backend = self.backend.clone();
        let collection = self.collection.clone();
        let form = record_form(&self.document, move |record| backend.add_record(&collection, record))?;

        self.root.append_child(&self.controls.app_marker)?;
        self.root.append_child(&self.controls.sign_out)?;
        self.root.append_child(list.element())?;
        self.root.append_child(&form)?;
        Ok(SignedInView { list, _form: form })
    }

    fn start_live_updates(&self) {
        let this = self.this.clone();
        let watched = self.backend.watch_records(
            &self.collection,
            Box::new(move |records: Records| {
                if let Some(inner) = this.upgrade() {
                    inner.broadcast(&AppEvent::RecordsReceived(records));
                }
            }),
        );
        match watched {
            Ok(subscription) => {
                let previous = self.live.borrow_mut().replace(subscription);
                if let Some(previous) = previous {
                    previous.cancel();
                }
            }
            Err(e) => log::warn!("watch `{}`: {e}", self.collection),
        }
    }

    fn stop_live_updates(&self) {
        let live = self.live.borrow_mut().take();
        if let Some(subscription) = live {
            subscription.cancel();
        }
        self.state.borrow_mut().clear_records();
    }

    fn receive_records(&self, records: &Records) {
        self.state.borrow_mut().records = records.clone();
        if let Some(view) = self.view.borrow().as_ref() {
            if let Err(e) = view.list.render(&self.document, records) {
                log::warn!("render records: {e}");
            }
        }
    }
}
