//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser app is a static shell plus a WASM bundle under `SITE_DIR`.
//! The server hands out those files, answers unknown paths with
//! `index.html` so deep links load the app, and exposes the one JSON
//! endpoint the app reads at boot.

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;

use std::path::Path;
use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use client::config::{CONFIG_PATH, ClientConfig};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    client: Arc<ClientConfig>,
}

impl AppState {
    pub fn new(client: ClientConfig) -> Self {
        Self { client: Arc::new(client) }
    }
}

pub fn app(state: AppState, site_dir: &Path) -> Router {
    let site = ServeDir::new(site_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(site_dir.join("index.html")));

    Router::new()
        .route(CONFIG_PATH, get(client_config))
        .route("/healthz", get(healthz))
        .with_state(state)
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn client_config(State(state): State<AppState>) -> Json<ClientConfig> {
    Json(state.client.as_ref().clone())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
