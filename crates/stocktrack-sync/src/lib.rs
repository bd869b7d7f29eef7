//! # stocktrack-sync: Cloud Mirror
//!
//! Optional backup/restore of the local tables against a remote spreadsheet
//! service. The mirror only ever reads the full local tables or
//! wholesale-replaces them; it never performs row-level edits, locally or
//! remotely.
//!
//! ## Status Lifecycle
//! ```text
//!              connectivity restored
//!   offline ────────────────────────► online
//!      ▲                               │  ▲
//!      │ probe fails                   │  │ push done / restored observed
//!      │                        push / │  │
//!      │                         pull  ▼  │
//!      └────────────────────────── syncing
//!                                      │
//!                     successful pull  ▼
//!                                  restored   (reported once, then online)
//! ```
//!
//! ## Module Organization
//!
//! - [`status`] - Four-valued sync status in an injectable handle
//! - [`probe`] - TCP reachability check for "is cloud reachable"
//! - [`config`] - Remote table id + credential file settings
//! - [`sheets`] - Spreadsheet service REST client (JWT service account)
//! - [`mirror`] - Push/pull of both tables as black boxes
//! - [`error`] - Sync error taxonomy

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod mirror;
pub mod probe;
pub mod sheets;
pub mod status;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::MirrorConfig;
pub use error::{SyncError, SyncResult};
pub use mirror::{CloudMirror, PullSummary, PushSummary, HISTORY_WORKSHEET, STOCK_WORKSHEET};
pub use probe::ConnectivityProbe;
pub use status::{StatusHandle, StatusSnapshot, SyncStatus};
