//! In-memory TreeStore
//!
//! A single JSON tree behind an async RwLock. Serves as the test double
//! for every integration suite and as an offline store. The clock used for
//! server-timestamp substitution is injectable so timestamp behavior is
//! deterministic under test.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use khata_core::errors::Result;
use khata_core::store::{resolve_server_values, TreeStore};
use khata_core_types::TreePath;

use crate::connection::{ConnectionMonitor, ConnectionState};

type SharedClock = Arc<dyn Fn() -> i64 + Send + Sync>;

/// An in-memory hierarchical key-value tree
pub struct MemoryStore {
    root: RwLock<Value>,
    clock: SharedClock,
    monitor: ConnectionMonitor,
}

impl MemoryStore {
    /// An empty store stamping timestamps from the wall clock
    pub fn new() -> Self {
        Self::with_clock(|| Utc::now().timestamp_millis())
    }

    /// An empty store with an injected millisecond clock
    pub fn with_clock(clock: impl Fn() -> i64 + Send + Sync + 'static) -> Self {
        let monitor = ConnectionMonitor::new();
        monitor.set(ConnectionState::Connected);
        Self {
            root: RwLock::new(Value::Null),
            clock: Arc::new(clock),
            monitor,
        }
    }

    /// The store's connection monitor (always connected once constructed)
    pub fn monitor(&self) -> &ConnectionMonitor {
        &self.monitor
    }

    /// Clone of the whole tree, for test assertions
    pub async fn snapshot(&self) -> Value {
        self.root.read().await.clone()
    }

    /// Walk to the node at `path`, creating object parents as needed
    fn node_mut<'a>(root: &'a mut Value, path: &TreePath) -> &'a mut Value {
        let mut node = root;
        for segment in path.segments() {
            if !node.is_object() {
                *node = Value::Object(Map::new());
            }
            let Value::Object(map) = node else {
                unreachable!("node was just made an object");
            };
            node = map.entry(segment.clone()).or_insert(Value::Null);
        }
        node
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TreeStore for MemoryStore {
    async fn get(&self, path: &TreePath) -> Result<Option<Value>> {
        let root = self.root.read().await;
        let mut node = &*root;
        for segment in path.segments() {
            match node.get(segment) {
                Some(child) => node = child,
                None => return Ok(None),
            }
        }
        if node.is_null() {
            return Ok(None);
        }
        Ok(Some(node.clone()))
    }

    async fn set(&self, path: &TreePath, mut value: Value) -> Result<()> {
        resolve_server_values(&mut value, (self.clock)());
        let mut root = self.root.write().await;
        *Self::node_mut(&mut root, path) = value;
        Ok(())
    }

    async fn update(&self, path: &TreePath, fields: Map<String, Value>) -> Result<()> {
        let now = (self.clock)();
        let mut root = self.root.write().await;
        let node = Self::node_mut(&mut root, path);
        if !node.is_object() {
            *node = Value::Object(Map::new());
        }
        let Value::Object(map) = node else {
            unreachable!("node was just made an object");
        };
        for (key, mut value) in fields {
            resolve_server_values(&mut value, now);
            map.insert(key, value);
        }
        Ok(())
    }
}
