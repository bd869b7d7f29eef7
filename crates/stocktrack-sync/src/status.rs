//! # Sync Status
//!
//! The process-wide sync indicator: one of four states, a human-readable
//! message, and an optional last-sync timestamp. In-memory only; resets to
//! offline on process restart.
//!
//! Held in an explicitly owned, injectable [`StatusHandle`] shared between
//! the cloud mirror (which drives transitions) and the HTTP surface (which
//! reads snapshots). All mutation goes through the handle's methods.

use std::sync::{Arc, RwLock};

use chrono::Local;
use serde::{Deserialize, Serialize};

use stocktrack_core::TIMESTAMP_FORMAT;

use crate::probe::ConnectivityProbe;

// =============================================================================
// Sync Status
// =============================================================================

/// The four-valued sync state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    /// Cloud unreachable (also the initial state).
    Offline,
    /// Cloud reachable, no operation in flight.
    Online,
    /// A push or pull is running.
    Syncing,
    /// A pull just completed; reported once, then reverts to online.
    Restored,
}

/// A point-in-time copy of the status indicator.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    pub status: SyncStatus,
    pub message: String,
    /// Timestamp of the last successful push or pull, fixed format.
    pub last_sync: Option<String>,
}

impl Default for StatusSnapshot {
    fn default() -> Self {
        StatusSnapshot {
            status: SyncStatus::Offline,
            message: "Not connected".to_string(),
            last_sync: None,
        }
    }
}

// =============================================================================
// Status Handle
// =============================================================================

/// Thread-safe, shareable holder of the sync status.
#[derive(Debug, Clone, Default)]
pub struct StatusHandle {
    inner: Arc<RwLock<StatusSnapshot>>,
}

impl StatusHandle {
    /// Creates a handle in the initial offline state.
    pub fn new() -> Self {
        StatusHandle::default()
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> StatusSnapshot {
        self.inner
            .read()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    /// Sets status and message, keeping the last-sync stamp.
    pub fn set(&self, status: SyncStatus, message: impl Into<String>) {
        if let Ok(mut s) = self.inner.write() {
            s.status = status;
            s.message = message.into();
        }
    }

    /// Sets status and message and stamps the last-sync time with the
    /// current local clock.
    pub fn mark_synced(&self, status: SyncStatus, message: impl Into<String>) {
        let stamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        if let Ok(mut s) = self.inner.write() {
            s.status = status;
            s.message = message.into();
            s.last_sync = Some(stamp);
        }
    }

    /// Snapshot for a status check, with the check's side effects applied.
    ///
    /// ## Behavior
    /// - `Syncing`: returned as-is, no re-probe mid-operation
    /// - `Restored`: returned once, then the handle reverts to online
    /// - otherwise: the probe runs and the state flips `offline ↔ online`
    pub async fn refreshed(&self, probe: &ConnectivityProbe) -> StatusSnapshot {
        let current = self.snapshot();
        match current.status {
            SyncStatus::Syncing => current,
            SyncStatus::Restored => {
                self.set(SyncStatus::Online, "Connected");
                current
            }
            SyncStatus::Offline | SyncStatus::Online => {
                if probe.is_online().await {
                    if current.status == SyncStatus::Offline {
                        self.set(SyncStatus::Online, "Connected");
                    }
                } else {
                    self.set(SyncStatus::Offline, "Offline");
                }
                self.snapshot()
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    async fn reachable_probe() -> (tokio::net::TcpListener, ConnectivityProbe) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let probe = ConnectivityProbe::new(addr.to_string(), Duration::from_secs(1));
        (listener, probe)
    }

    async fn unreachable_probe() -> ConnectivityProbe {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        ConnectivityProbe::new(addr.to_string(), Duration::from_millis(200))
    }

    #[test]
    fn test_initial_state_is_offline() {
        let handle = StatusHandle::new();
        let snapshot = handle.snapshot();
        assert_eq!(snapshot.status, SyncStatus::Offline);
        assert_eq!(snapshot.message, "Not connected");
        assert!(snapshot.last_sync.is_none());
    }

    #[test]
    fn test_mark_synced_stamps_last_sync() {
        let handle = StatusHandle::new();
        handle.mark_synced(SyncStatus::Online, "Synced");
        let snapshot = handle.snapshot();
        assert_eq!(snapshot.status, SyncStatus::Online);
        assert!(snapshot.last_sync.is_some());
    }

    #[tokio::test]
    async fn test_refreshed_flips_offline_to_online() {
        let (_listener, probe) = reachable_probe().await;
        let handle = StatusHandle::new();

        let snapshot = handle.refreshed(&probe).await;
        assert_eq!(snapshot.status, SyncStatus::Online);
        assert_eq!(snapshot.message, "Connected");
    }

    #[tokio::test]
    async fn test_refreshed_flips_online_to_offline() {
        let probe = unreachable_probe().await;
        let handle = StatusHandle::new();
        handle.set(SyncStatus::Online, "Connected");

        let snapshot = handle.refreshed(&probe).await;
        assert_eq!(snapshot.status, SyncStatus::Offline);
        assert_eq!(snapshot.message, "Offline");
    }

    #[tokio::test]
    async fn test_restored_is_reported_once_then_reverts() {
        let (_listener, probe) = reachable_probe().await;
        let handle = StatusHandle::new();
        handle.mark_synced(SyncStatus::Restored, "Restored from the cloud");

        let first = handle.refreshed(&probe).await;
        assert_eq!(first.status, SyncStatus::Restored);

        let second = handle.refreshed(&probe).await;
        assert_eq!(second.status, SyncStatus::Online);
    }

    #[tokio::test]
    async fn test_syncing_is_not_reprobed() {
        let probe = unreachable_probe().await;
        let handle = StatusHandle::new();
        handle.set(SyncStatus::Syncing, "Sync in progress");

        let snapshot = handle.refreshed(&probe).await;
        assert_eq!(snapshot.status, SyncStatus::Syncing);
        assert_eq!(handle.snapshot().status, SyncStatus::Syncing);
    }
}
