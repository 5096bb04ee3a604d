//! Firebase Auth (Google popup) + Cloud Firestore backend.
//!
//! Requires a browser: the SDK is imported as ES modules by the generated
//! wasm-bindgen glue. Promise-returning calls are driven on the local
//! executor and their rejections are logged.

use js_sys::{Function, Promise};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::firebase_sys as sys;
use super::{Backend, BackendError, Record, Records, RecordsListener, Session, SessionListener, Subscription};
use crate::config::FirebaseConfig;
use crate::dom::web::js_message;

pub struct FirebaseBackend {
    auth: sys::Auth,
    firestore: sys::Firestore,
    provider: sys::GoogleAuthProvider,
}

impl FirebaseBackend {
    /// Initialize the default Firebase app from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Init`] if the SDK rejects the options.
    pub fn initialize(config: &FirebaseConfig) -> Result<Self, BackendError> {
        let options = to_js(config)?;
        let app = sys::initialize_app(&options).map_err(|e| BackendError::Init(js_message(&e)))?;
        log::info!("firebase initialized for project `{}`", config.project_id);
        Ok(Self {
            auth: sys::get_auth(&app),
            firestore: sys::get_firestore(&app),
            provider: sys::GoogleAuthProvider::new(),
        })
    }

    fn collection(&self, name: &str) -> Result<sys::CollectionReference, BackendError> {
        sys::collection(&self.firestore, name).map_err(|e| BackendError::Collection {
            collection: name.to_owned(),
            message: js_message(&e),
        })
    }
}

impl Backend for FirebaseBackend {
    fn sign_in(&self) {
        match sys::sign_in_with_popup(&self.auth, &self.provider) {
            Ok(promise) => settle("sign in", promise),
            Err(e) => log::warn!("sign in failed: {}", js_message(&e)),
        }
    }

    fn sign_out(&self) {
        match sys::sign_out(&self.auth) {
            Ok(promise) => settle("sign out", promise),
            Err(e) => log::warn!("sign out failed: {}", js_message(&e)),
        }
    }

    fn on_session_change(&self, listener: SessionListener) -> Result<Subscription, BackendError> {
        let next = Closure::<dyn FnMut(JsValue)>::new(move |user: JsValue| listener(session_from_js(&user)));
        let unsubscribe = sys::on_auth_state_changed(&self.auth, next.as_ref().unchecked_ref())
            .map_err(|e| BackendError::Subscribe(js_message(&e)))?;
        Ok(Subscription::new(move || {
            call_unsubscribe(&unsubscribe);
            drop(next);
        }))
    }

    fn add_record(&self, collection: &str, record: Record) {
        let pending = self.collection(collection).and_then(|reference| {
            let data = to_js(&record)?;
            sys::add_doc(&reference, &data).map_err(|e| BackendError::Convert(js_message(&e)))
        });
        match pending {
            Ok(promise) => settle("add record", promise),
            Err(e) => log::warn!("add record failed: {e}"),
        }
    }

    fn watch_records(&self, collection: &str, listener: RecordsListener) -> Result<Subscription, BackendError> {
        let reference = self.collection(collection)?;
        let query = sys::query(&reference).map_err(|e| BackendError::Subscribe(js_message(&e)))?;

        let next = Closure::<dyn FnMut(sys::QuerySnapshot)>::new(move |snapshot: sys::QuerySnapshot| {
            listener(records_from_snapshot(&snapshot));
        });
        let name = collection.to_owned();
        let error = Closure::<dyn FnMut(JsValue)>::new(move |e: JsValue| {
            log::warn!("live query on `{name}` failed: {}", js_message(&e));
        });
        let unsubscribe = sys::on_snapshot(&query, next.as_ref().unchecked_ref(), error.as_ref().unchecked_ref())
            .map_err(|e| BackendError::Subscribe(js_message(&e)))?;

        Ok(Subscription::new(move || {
            call_unsubscribe(&unsubscribe);
            drop((next, error));
        }))
    }
}

fn settle(operation: &'static str, promise: Promise) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("{operation} failed: {}", js_message(&e));
        }
    });
}

fn call_unsubscribe(unsubscribe: &Function) {
    if let Err(e) = unsubscribe.call0(&JsValue::NULL) {
        log::warn!("unsubscribe failed: {}", js_message(&e));
    }
}

fn session_from_js(user: &JsValue) -> Option<Session> {
    if user.is_null() || user.is_undefined() {
        return None;
    }
    let user: &sys::User = user.unchecked_ref();
    Some(Session {
        uid: user.uid(),
        display_name: user.display_name(),
        email: user.email(),
    })
}

fn records_from_snapshot(snapshot: &sys::QuerySnapshot) -> Records {
    snapshot
        .docs()
        .iter()
        .map(|doc| {
            let doc: sys::QueryDocumentSnapshot = doc.unchecked_into();
            let record = record_from_js(&doc.data()).unwrap_or_else(|e| {
                log::warn!("document {} unreadable: {e}", doc.id());
                Record::default()
            });
            (doc.id(), record)
        })
        .collect()
}

fn record_from_js(data: &JsValue) -> Result<Record, BackendError> {
    if data.is_null() || data.is_undefined() {
        return Ok(Record::default());
    }
    let text = js_sys::JSON::stringify(data).map_err(|e| BackendError::Convert(js_message(&e)))?;
    Ok(serde_json::from_str(&String::from(text))?)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, BackendError> {
    let text = serde_json::to_string(value)?;
    js_sys::JSON::parse(&text).map_err(|e| BackendError::Convert(js_message(&e)))
}
