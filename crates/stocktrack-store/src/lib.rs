//! # stocktrack-store: File-Backed Tables
//!
//! Storage layer for the inventory tracker. Both tables live as CSV files
//! under a fixed data directory and are rewritten whole on every mutation;
//! there is no row-level update anywhere in this crate.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     stocktrack-store                                │
//! │                                                                     │
//! │   ┌────────────────┐   ┌───────────────┐   ┌─────────────────────┐  │
//! │   │ InventoryLedger│   │  HistoryLog   │   │  SaleCoordinator    │  │
//! │   │  (ledger.rs)   │   │ (history.rs)  │   │     (sale.rs)       │  │
//! │   │                │   │               │   │                     │  │
//! │   │ CRUD, alerts   │   │ append, query │   │ decrement + append  │  │
//! │   └───────┬────────┘   └──────┬────────┘   └─────────┬───────────┘  │
//! │           │                   │                      │              │
//! │           └───────────┬───────┴──────────────────────┘              │
//! │                       ▼                                             │
//! │   ┌───────────────────────────────────────────────────────────────┐ │
//! │   │                 TableFile (table.rs)                          │ │
//! │   │   load degrades to empty • save classifies locked files       │ │
//! │   └───────────────────────────────────────────────────────────────┘ │
//! │                       │                                             │
//! │                       ▼                                             │
//! │             data/stock.csv   data/history.csv                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`table`] - Tabular store adapter (typed + raw access)
//! - [`ledger`] - Inventory ledger over the stock table
//! - [`history`] - Append-only sale history log
//! - [`sale`] - Sale transaction coordinator
//! - [`seed`] - Built-in sample rows for first start
//! - [`error`] - Storage error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod history;
pub mod ledger;
pub mod sale;
pub mod seed;
pub mod table;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use history::{HistoryLog, HistoryReport};
pub use ledger::{InventoryLedger, NewItem};
pub use sale::{SaleCoordinator, SaleReceipt, SellError};
pub use table::{RawTable, TableFile};

use std::path::Path;

use stocktrack_core::{HISTORY_COLUMNS, STOCK_COLUMNS};

// =============================================================================
// Table Locations
// =============================================================================

/// File name of the stock table inside the data directory.
pub const STOCK_FILE_NAME: &str = "stock.csv";

/// File name of the sale history table inside the data directory.
pub const HISTORY_FILE_NAME: &str = "history.csv";

/// The stock table file under `data_dir`.
pub fn stock_table(data_dir: &Path) -> TableFile {
    TableFile::new(data_dir.join(STOCK_FILE_NAME), &STOCK_COLUMNS)
}

/// The sale history table file under `data_dir`.
pub fn history_table(data_dir: &Path) -> TableFile {
    TableFile::new(data_dir.join(HISTORY_FILE_NAME), &HISTORY_COLUMNS)
}
