//! The remote store seam
//!
//! The facade talks to a hierarchical key-value tree through [`TreeStore`]:
//! whole-subtree reads, full-value overwrites, and partial-field merges,
//! all addressed by slash-delimited [`TreePath`]s. Implementations live in
//! `khata-store` (in-memory tree, RTDB-style REST client).
//!
//! Timestamps are server-assigned: callers place the [`server_timestamp`]
//! sentinel in a value, and the store substitutes its own clock at write
//! time. Clients never supply wall-clock timestamps themselves.

use async_trait::async_trait;
use khata_core_types::TreePath;
use serde_json::{json, Map, Value};

use crate::errors::Result;

/// Key marking a server-substituted value inside a JSON object
pub const SERVER_VALUE_KEY: &str = ".sv";

/// The sentinel a store replaces with its own clock (epoch millis) at write time
pub fn server_timestamp() -> Value {
    json!({ SERVER_VALUE_KEY: "timestamp" })
}

/// True if a value is the server-timestamp sentinel
pub fn is_server_timestamp(value: &Value) -> bool {
    value
        .as_object()
        .map(|obj| obj.len() == 1 && obj.get(SERVER_VALUE_KEY) == Some(&json!("timestamp")))
        .unwrap_or(false)
}

/// Replace every server-timestamp sentinel in a value tree with `now_millis`
///
/// Store implementations that own their clock (the in-memory store) call
/// this on every written value. Remote backends substitute server-side and
/// receive the sentinel unchanged.
pub fn resolve_server_values(value: &mut Value, now_millis: i64) {
    if is_server_timestamp(value) {
        *value = json!(now_millis);
        return;
    }
    match value {
        Value::Object(map) => {
            for child in map.values_mut() {
                resolve_server_values(child, now_millis);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                resolve_server_values(item, now_millis);
            }
        }
        _ => {}
    }
}

/// A remote hierarchical key-value store addressed by slash-delimited paths
///
/// Operations are one network round trip each; the caller suspends until
/// the round trip completes. There is no atomicity across paths, no retry,
/// and no cancellation — once issued, an operation runs to completion or
/// failure. Failures surface as `KhataError::StoreUnavailable`.
#[async_trait]
pub trait TreeStore: Send + Sync {
    /// Read the whole subtree at `path`; `None` if nothing is stored there
    async fn get(&self, path: &TreePath) -> Result<Option<Value>>;

    /// Overwrite the value at `path` (full replace, not a merge)
    async fn set(&self, path: &TreePath, value: Value) -> Result<()>;

    /// Merge `fields` into the object at `path`, leaving other fields intact
    async fn update(&self, path: &TreePath, fields: Map<String, Value>) -> Result<()>;
}
