//! # Application State
//!
//! Shared state handed to every handler: the ledger, the history log, the
//! sale coordinator, and the cloud mirror with its status handle. All of
//! them are handles over the two table files; the files themselves are the
//! single source of truth, so no in-memory cache sits between requests.

use std::sync::Arc;

use stocktrack_store::{
    history_table, stock_table, HistoryLog, InventoryLedger, SaleCoordinator,
};
use stocktrack_sync::{CloudMirror, ConnectivityProbe, StatusHandle};

use crate::config::AppConfig;

/// Shared application state.
pub struct AppState {
    pub ledger: InventoryLedger,
    pub history: HistoryLog,
    pub sales: SaleCoordinator,
    pub mirror: CloudMirror,
}

/// The state type handlers receive.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Builds the state from configuration, with the default probe.
    pub fn new(config: &AppConfig) -> Self {
        AppState::with_probe(config, ConnectivityProbe::default())
    }

    /// Builds the state with an explicit connectivity probe.
    pub fn with_probe(config: &AppConfig, probe: ConnectivityProbe) -> Self {
        let stock = stock_table(&config.data_dir);
        let history = history_table(&config.data_dir);

        let ledger = InventoryLedger::new(stock.clone());
        let history_log = HistoryLog::new(history.clone());
        let sales = SaleCoordinator::new(ledger.clone(), history_log.clone());

        let mirror = CloudMirror::new(
            config.mirror_config(),
            probe,
            StatusHandle::new(),
            stock,
            history,
        );

        AppState {
            ledger,
            history: history_log,
            sales,
            mirror,
        }
    }
}
