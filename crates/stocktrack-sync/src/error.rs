//! # Sync Error Types
//!
//! Error taxonomy for cloud mirror operations.
//!
//! ## Categories
//! ```text
//! ┌─────────────────┐  ┌──────────────────┐  ┌───────────────────────┐
//! │  Reachability   │  │  Authentication  │  │  Remote State         │
//! │                 │  │                  │  │                       │
//! │  NoConnectivity │  │  AuthFailed      │  │  SpreadsheetNotFound  │
//! │                 │  │                  │  │  WorksheetMissing     │
//! │                 │  │                  │  │  RemoteEmpty          │
//! └─────────────────┘  └──────────────────┘  └───────────────────────┘
//!
//! ┌─────────────────┐  ┌──────────────────┐
//! │  Local State    │  │  Everything Else │
//! │                 │  │                  │
//! │  LocalFileMissing  │  Api, Other      │
//! │  EmptyStockGuard│  │                  │
//! └─────────────────┘  └──────────────────┘
//! ```
//!
//! Every variant carries the original cause text where one exists; nothing
//! here is allowed to terminate the process, callers translate each kind
//! into a structured response at the operation boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Cloud mirror failures.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The well-known endpoint is unreachable.
    #[error("No internet connection")]
    NoConnectivity,

    /// Authentication with the remote spreadsheet service failed.
    ///
    /// Also produced when the mirror is not configured (missing remote
    /// table id or credential file); a misconfigured mirror degrades to
    /// this error rather than affecting anything else.
    #[error("Spreadsheet service authentication failed: {0}")]
    AuthFailed(String),

    /// The configured spreadsheet id does not resolve to a spreadsheet.
    #[error(
        "Spreadsheet not found: {0}. Check the configured id and that the \
         spreadsheet is shared with the service account email with editor rights"
    )]
    SpreadsheetNotFound(String),

    /// A required worksheet is absent from the remote spreadsheet.
    #[error("Worksheet '{0}' not found in the cloud")]
    WorksheetMissing(String),

    /// The remote worksheet exists but has no data rows beyond its header.
    #[error("No data rows in cloud worksheet '{0}'")]
    RemoteEmpty(String),

    /// A local table file required for push does not exist.
    #[error("Local file missing: {}", .0.display())]
    LocalFileMissing(PathBuf),

    /// Push refused: the local stock table is empty and pushing it would
    /// wipe the remote copy.
    #[error("Local stock table is empty; push cancelled to protect the remote data")]
    EmptyStockGuard,

    /// The remote API answered with a failure.
    #[error("Spreadsheet service error: {0}")]
    Api(String),

    /// Any other failure, with the original cause text.
    #[error("Sync failed: {0}")]
    Other(String),
}

impl SyncError {
    /// True when the failure means "cloud unreachable" and the status
    /// indicator should read offline.
    pub fn is_offline(&self) -> bool {
        matches!(self, SyncError::NoConnectivity)
    }

    /// True when the failure is a local precondition (missing file, empty
    /// stock) rather than anything remote.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            SyncError::LocalFileMissing(_) | SyncError::EmptyStockGuard
        )
    }
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        SyncError::Api(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for SyncError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        SyncError::AuthFailed(err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
