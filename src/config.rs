//! Dev server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path::PathBuf;

use client::config::{BackendConfig, ClientConfig, DEFAULT_COLLECTION, FirebaseConfig};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_DIR: &str = "site";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {var}")]
    Missing { var: &'static str },
    #[error("invalid {var}: {message}")]
    Invalid { var: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub site_dir: PathBuf,
    pub client: ClientConfig,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from `lookup`.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_DIR`: directory holding `index.html` and `pkg/`, default `site`
    /// - `RECORDS_BACKEND`: `firebase` (default) or `memory`
    /// - `RECORDS_COLLECTION`: default `posts`
    ///
    /// Required when the backend is `firebase`:
    /// - `FIREBASE_API_KEY`, `FIREBASE_AUTH_DOMAIN`, `FIREBASE_PROJECT_ID`,
    ///   `FIREBASE_STORAGE_BUCKET`, `FIREBASE_MESSAGING_SENDER_ID`,
    ///   `FIREBASE_APP_ID`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for unparseable values or missing Firebase keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: "PORT",
                message: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };
        let site_dir = PathBuf::from(lookup("SITE_DIR").unwrap_or_else(|| DEFAULT_SITE_DIR.to_string()));

        let backend = match lookup("RECORDS_BACKEND").as_deref().unwrap_or("firebase") {
            "firebase" => BackendConfig::Firebase(firebase_from_lookup(&lookup)?),
            "memory" => BackendConfig::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    var: "RECORDS_BACKEND",
                    message: format!("unknown backend '{other}' (expected 'firebase' or 'memory')"),
                });
            }
        };

        let collection = lookup("RECORDS_COLLECTION").unwrap_or_else(|| DEFAULT_COLLECTION.to_string());
        if collection.is_empty() || collection.contains('/') {
            return Err(ConfigError::Invalid {
                var: "RECORDS_COLLECTION",
                message: format!("'{collection}' is not a top-level collection name"),
            });
        }

        Ok(Self { port, site_dir, client: ClientConfig { backend, collection } })
    }
}

fn firebase_from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<FirebaseConfig, ConfigError> {
    let required = |var: &'static str| {
        lookup(var)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing { var })
    };
    Ok(FirebaseConfig {
        api_key: required("FIREBASE_API_KEY")?,
        auth_domain: required("FIREBASE_AUTH_DOMAIN")?,
        project_id: required("FIREBASE_PROJECT_ID")?,
        storage_bucket: required("FIREBASE_STORAGE_BUCKET")?,
        messaging_sender_id: required("FIREBASE_MESSAGING_SENDER_ID")?,
        app_id: required("FIREBASE_APP_ID")?,
    })
}
