//! Client configuration.
//!
//! The dev server builds this from its environment and serves it as JSON at
//! [`CONFIG_PATH`]; the browser fetches it once at boot.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const CONFIG_PATH: &str = "/api/config";
pub const DEFAULT_COLLECTION: &str = "posts";

/// Web app options, named as the Firebase SDK expects them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

/// Which backend the client talks to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BackendConfig {
    Firebase(FirebaseConfig),
    Memory,
}

impl BackendConfig {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Firebase(_) => "firebase",
            Self::Memory => "memory",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub backend: BackendConfig,
    #[serde(default = "default_collection")]
    pub collection: String,
}

impl ClientConfig {
    pub fn memory() -> Self {
        Self {
            backend: BackendConfig::Memory,
            collection: default_collection(),
        }
    }
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_owned()
}

/// Fetch the config from the serving origin.
///
/// # Errors
///
/// Returns [`crate::ClientError::Config`] on transport failure, non-success
/// status, or an unparseable body.
#[cfg(feature = "hydrate")]
pub async fn fetch() -> Result<ClientConfig, crate::ClientError> {
    use crate::ClientError;

    let resp = gloo_net::http::Request::get(CONFIG_PATH)
        .send()
        .await
        .map_err(|e| ClientError::Config(e.to_string()))?;
    if !(200..300).contains(&resp.status()) {
        return Err(ClientError::Config(format!("config request failed: {}", resp.status())));
    }
    resp.json::<ClientConfig>()
        .await
        .map_err(|e| ClientError::Config(e.to_string()))
}
