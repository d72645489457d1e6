//! REST TreeStore against an RTDB-style hosted backend
//!
//! The hosted tree exposes every path as `{base}/{path}.json` with GET for
//! subtree reads, PUT for full overwrites, and PATCH for partial merges.
//! Server-timestamp sentinels pass through unchanged; the backend
//! substitutes them at write time.
//!
//! No retries and no backoff: a failed round trip surfaces as
//! `StoreUnavailable` and feeds the connection monitor.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use khata_core::errors::{KhataError, Result};
use khata_core::store::TreeStore;
use khata_core_types::TreePath;

use crate::connection::{ConnectionMonitor, ConnectionState};

/// Connection settings for the hosted backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Database root, e.g. `https://my-society.firebaseio.example`
    pub base_url: String,

    /// Database auth token appended as the `auth` query parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "StoreConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl StoreConfig {
    /// Config for a base URL with the default timeout and no token
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
            timeout_secs: Self::default_timeout_secs(),
        }
    }

    fn default_timeout_secs() -> u64 {
        30
    }
}

/// A `TreeStore` speaking the hosted backend's REST dialect
pub struct RestStore {
    config: StoreConfig,
    client: reqwest::Client,
    monitor: ConnectionMonitor,
}

impl RestStore {
    /// Build a client for the configured backend
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the HTTP client cannot be constructed.
    pub fn new(config: StoreConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| KhataError::store_unavailable(err.to_string()))?;
        Ok(Self {
            config,
            client,
            monitor: ConnectionMonitor::new(),
        })
    }

    /// The store's connection monitor, fed from call outcomes
    pub fn monitor(&self) -> &ConnectionMonitor {
        &self.monitor
    }

    /// `{base}/{path}.json`, plus the auth token when configured
    ///
    /// Segments and the token are percent-encoded: record ids come from
    /// caller-supplied natural keys and may carry `?`, `#`, or spaces.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` when the configured base URL does not
    /// parse or cannot carry path segments.
    fn url(&self, path: &TreePath) -> Result<Url> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|err| KhataError::store_unavailable(format!("invalid base url: {err}")))?;
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                KhataError::store_unavailable("base url cannot carry path segments")
            })?;
            segments.pop_if_empty();
            match path.segments().split_last() {
                Some((last, init)) => {
                    for segment in init {
                        segments.push(segment);
                    }
                    segments.push(&format!("{last}.json"));
                }
                None => {
                    segments.push(".json");
                }
            }
        }
        if let Some(token) = &self.config.auth_token {
            url.query_pairs_mut().append_pair("auth", token);
        }
        Ok(url)
    }

    /// Track the transport outcome of one round trip
    fn observe<T>(&self, outcome: std::result::Result<T, reqwest::Error>) -> Result<T> {
        match outcome {
            Ok(value) => {
                self.monitor.set(ConnectionState::Connected);
                Ok(value)
            }
            Err(err) => {
                self.monitor.set(ConnectionState::Disconnected);
                Err(KhataError::store_unavailable(err.to_string()))
            }
        }
    }
}

#[async_trait]
impl TreeStore for RestStore {
    async fn get(&self, path: &TreePath) -> Result<Option<Value>> {
        debug!(%path, "GET");
        let response = self.observe(self.client.get(self.url(path)?).send().await)?;
        let response = self.observe(response.error_for_status())?;
        let value: Value = self.observe(response.json().await)?;
        // The backend renders an absent path as a JSON null body
        if value.is_null() {
            return Ok(None);
        }
        Ok(Some(value))
    }

    async fn set(&self, path: &TreePath, value: Value) -> Result<()> {
        debug!(%path, "PUT");
        let response =
            self.observe(self.client.put(self.url(path)?).json(&value).send().await)?;
        self.observe(response.error_for_status())?;
        Ok(())
    }

    async fn update(&self, path: &TreePath, fields: Map<String, Value>) -> Result<()> {
        debug!(%path, "PATCH");
        let body = Value::Object(fields);
        let response = self.observe(
            self.client
                .patch(self.url(path)?)
                .json(&body)
                .send()
                .await,
        )?;
        self.observe(response.error_for_status())?;
        Ok(())
    }
}
