use super::*;
use std::path::PathBuf;

use client::config::{BackendConfig, FirebaseConfig};

const INDEX_HTML: &str = "<!doctype html><div id=\"root\"></div>";
const BUNDLE_JS: &str = "export default function init() {}";

/// Fresh site directory with an `index.html` and a `pkg/client.js`.
fn site_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("foldable-routes-{}-{name}", std::process::id()));
    std::fs::create_dir_all(dir.join("pkg")).unwrap();
    std::fs::write(dir.join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(dir.join("pkg").join("client.js"), BUNDLE_JS).unwrap();
    dir
}

/// Serve `app` on an ephemeral port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn firebase_client() -> ClientConfig {
    ClientConfig {
        backend: BackendConfig::Firebase(FirebaseConfig {
            api_key: "key".into(),
            auth_domain: "demo.firebaseapp.com".into(),
            project_id: "demo".into(),
            storage_bucket: "demo.appspot.com".into(),
            messaging_sender_id: "42".into(),
            app_id: "1:42:web:abc".into(),
        }),
        collection: "posts".into(),
    }
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn client_config_handler_returns_configured_value() {
    let state = AppState::new(firebase_client());
    let Json(body) = client_config(State(state)).await;
    assert_eq!(body, firebase_client());
}

#[tokio::test]
async fn config_endpoint_serves_tagged_json() {
    let dir = site_dir("config");
    let base = serve(app(AppState::new(firebase_client()), &dir)).await;

    let resp = reqwest::get(format!("{base}{CONFIG_PATH}")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["backend"]["kind"], "firebase");
    assert_eq!(json["backend"]["apiKey"], "key");
    assert_eq!(json["collection"], "posts");
}

#[tokio::test]
async fn static_bundle_is_served_from_site_dir() {
    let dir = site_dir("static");
    let base = serve(app(AppState::new(ClientConfig::memory()), &dir)).await;

    let resp = reqwest::get(format!("{base}/pkg/client.js")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), BUNDLE_JS);
}

#[tokio::test]
async fn root_and_unknown_paths_fall_back_to_index() {
    let dir = site_dir("fallback");
    let base = serve(app(AppState::new(ClientConfig::memory()), &dir)).await;

    for path in ["/", "/posts/abc", "/some/deep/link"] {
        let resp = reqwest::get(format!("{base}{path}")).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK, "{path}");
        assert_eq!(resp.text().await.unwrap(), INDEX_HTML, "{path}");
    }
}
