//! # client
//!
//! WASM single-page client for the foldable records collection. Signs the
//! user in through the configured backend, mirrors auth state into the DOM,
//! and renders a live list + create form for the records collection.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`dom`] | Element factory over the `Document`/`Element` seam (browser + in-memory hosts) |
//! | [`pubsub`] | Observable value, named emitter, typed event bus |
//! | [`backend`] | Auth + document collection façade (Firebase, in-memory) |
//! | [`state`] | Controller-owned application state and broadcast events |
//! | [`app`] | Application controller wiring auth changes to views |
//! | [`views`] | Auth controls, record list, record creation form |
//! | [`config`] | Client configuration served by the dev server |
//!
//! Everything that touches the real browser is gated behind the `hydrate`
//! feature; the rest builds and tests natively.

pub mod app;
pub mod backend;
pub mod config;
pub mod dom;
pub mod pubsub;
pub mod state;
pub mod views;

use thiserror::Error;

use crate::backend::BackendError;
use crate::dom::DomError;

/// Errors that abort client startup.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("config: {0}")]
    Config(String),
    #[error(transparent)]
    Dom(#[from] DomError),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

#[cfg(feature = "hydrate")]
thread_local! {
    static MOUNTED: std::cell::RefCell<Vec<Box<dyn std::any::Any>>> =
        const { std::cell::RefCell::new(Vec::new()) };
}

/// WASM entry point: install console logging, then boot asynchronously.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&e.to_string().into());
    }

    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = boot().await {
            log::error!("client startup failed: {e}");
        }
    });
}

#[cfg(feature = "hydrate")]
async fn boot() -> Result<(), ClientError> {
    use std::rc::Rc;

    use crate::app::App;
    use crate::backend::firebase::FirebaseBackend;
    use crate::backend::memory::MemoryBackend;
    use crate::config::BackendConfig;
    use crate::dom::web::WebDocument;

    let config = config::fetch().await?;
    let document = WebDocument::current()?;
    log::info!("starting with {} backend, collection `{}`", config.backend.name(), config.collection);

    match config.backend {
        BackendConfig::Firebase(firebase) => {
            let backend = Rc::new(FirebaseBackend::initialize(&firebase)?);
            keep_mounted(App::start(document, backend, config.collection)?);
        }
        BackendConfig::Memory => {
            let backend = Rc::new(MemoryBackend::new());
            keep_mounted(App::start(document, backend, config.collection)?);
        }
    }
    Ok(())
}

/// The controller lives for the rest of the page's lifetime.
#[cfg(feature = "hydrate")]
fn keep_mounted<T: 'static>(app: T) {
    MOUNTED.with(|mounted| mounted.borrow_mut().push(Box::new(app)));
}
