//! Shared fixtures for handler tests: an application state over a
//! temporary data directory, with a connectivity probe pointed at a closed
//! local port so nothing in a test ever dials out.

use std::sync::Arc;
use std::time::Duration;

use stocktrack_sync::ConnectivityProbe;

use crate::config::AppConfig;
use crate::state::{AppState, SharedState};

/// A fresh state over an empty temporary data directory.
///
/// The TempDir must be kept alive for the duration of the test.
pub fn test_state() -> (SharedState, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        port: 0,
        data_dir: dir.path().to_path_buf(),
        spreadsheet_id: None,
        credentials_file: None,
    };
    let probe = ConnectivityProbe::new(unreachable_addr(), Duration::from_millis(200));
    (Arc::new(AppState::with_probe(&config, probe)), dir)
}

/// A local address with nothing listening on it.
fn unreachable_addr() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr.to_string()
}
