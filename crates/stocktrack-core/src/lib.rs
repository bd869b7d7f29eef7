//! # stocktrack-core: Pure Domain Logic
//!
//! Types and rules for the inventory tracker, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     stocktrack Architecture                         │
//! │                                                                     │
//! │  HTTP API (apps/server)                                             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │              ★ stocktrack-core (THIS CRATE) ★                 │  │
//! │  │                                                               │  │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                 │  │
//! │  │   │   types   │  │   sale    │  │ validation│                 │  │
//! │  │   │   Item    │  │ quote_sale│  │  coercion │                 │  │
//! │  │   │SaleRecord │  │           │  │  checks   │                 │  │
//! │  │   └───────────┘  └───────────┘  └───────────┘                 │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS             │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  stocktrack-store (CSV tables, ledger, history, sale coordinator)   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, SaleRecord)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation and numeric coercion
//! - [`sale`] - Pure sale accept/reject decision

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod sale;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use sale::{quote_sale, SaleQuote};
pub use types::{Item, SaleRecord};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Column set of the stock table, in persisted order.
///
/// Fixed per table type; there is no schema migration (the medium is a
/// plain rectangular table).
pub const STOCK_COLUMNS: [&str; 5] = ["id", "name", "on_hand", "unit_price", "reorder_threshold"];

/// Column set of the sale history table, in persisted order.
pub const HISTORY_COLUMNS: [&str; 4] = ["timestamp", "item_name", "quantity", "total_price"];

/// Timestamp format used for sale records and sync stamps.
///
/// Local clock, second precision, fixed width. The same string appears in
/// the CSV files, the JSON API, and the remote worksheet cells.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
