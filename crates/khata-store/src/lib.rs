//! khata store - TreeStore implementations and connection monitoring
//!
//! Provides:
//! - `MemoryStore`: in-memory hierarchical tree, deterministic clocks for
//!   tests, offline use
//! - `RestStore`: RTDB-style REST client against a hosted backend
//! - `ConnectionMonitor`: advisory connection state over a watch channel

pub mod connection;
pub mod memory;
pub mod rest;

pub use connection::{ConnectionMonitor, ConnectionState};
pub use memory::MemoryStore;
pub use rest::{RestStore, StoreConfig};
