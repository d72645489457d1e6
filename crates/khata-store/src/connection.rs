//! Advisory connection-state monitoring
//!
//! Each store owns a `ConnectionMonitor` for its own lifecycle instead of
//! flipping a process-wide flag. Interested parties call `subscribe()` and
//! watch for transitions; the state is advisory only and never gates or
//! blocks an operation.

use tokio::sync::watch;

/// Last known connectivity of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No round trip has completed yet
    Unknown,
    /// The last round trip (or liveness probe) succeeded
    Connected,
    /// The last round trip failed at the transport level
    Disconnected,
}

/// Publishes connection-state transitions over a watch channel
#[derive(Debug)]
pub struct ConnectionMonitor {
    tx: watch::Sender<ConnectionState>,
}

impl ConnectionMonitor {
    /// A monitor starting in the `Unknown` state
    pub fn new() -> Self {
        let (tx, _) = watch::channel(ConnectionState::Unknown);
        Self { tx }
    }

    /// Record the latest observed state, notifying subscribers on change
    pub fn set(&self, state: ConnectionState) {
        self.tx.send_if_modified(|current| {
            if *current == state {
                false
            } else {
                *current = state;
                true
            }
        });
    }

    /// The last recorded state
    pub fn state(&self) -> ConnectionState {
        *self.tx.borrow()
    }

    /// Subscribe to state transitions
    ///
    /// The receiver immediately holds the current state; `changed().await`
    /// resolves on each subsequent transition.
    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.tx.subscribe()
    }
}

impl Default for ConnectionMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unknown() {
        let monitor = ConnectionMonitor::new();
        assert_eq!(monitor.state(), ConnectionState::Unknown);
    }

    #[tokio::test]
    async fn test_subscriber_sees_transition() {
        let monitor = ConnectionMonitor::new();
        let mut rx = monitor.subscribe();
        monitor.set(ConnectionState::Connected);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), ConnectionState::Connected);
    }

    #[tokio::test]
    async fn test_same_state_does_not_renotify() {
        let monitor = ConnectionMonitor::new();
        monitor.set(ConnectionState::Connected);
        let mut rx = monitor.subscribe();
        monitor.set(ConnectionState::Connected);
        assert!(!rx.has_changed().unwrap());
    }
}
