//! # Mirror Configuration
//!
//! The two settings the cloud mirror needs: the remote spreadsheet id and
//! the path to a service-account credential file. Both are optional at
//! process level; a mirror call on an unconfigured system degrades to an
//! authentication failure instead of affecting anything else.

use std::path::{Path, PathBuf};

use crate::error::{SyncError, SyncResult};

/// Cloud mirror settings.
#[derive(Debug, Clone, Default)]
pub struct MirrorConfig {
    /// Remote spreadsheet identifier.
    pub spreadsheet_id: Option<String>,

    /// Path to the service-account credential file (JSON).
    pub credentials_file: Option<PathBuf>,
}

impl MirrorConfig {
    /// Creates a config from optional settings.
    pub fn new(spreadsheet_id: Option<String>, credentials_file: Option<PathBuf>) -> Self {
        MirrorConfig {
            spreadsheet_id,
            credentials_file,
        }
    }

    /// True when both settings are present.
    pub fn is_configured(&self) -> bool {
        self.spreadsheet_id.is_some() && self.credentials_file.is_some()
    }

    /// Returns both settings, or the authentication failure a mirror call
    /// must degrade to when they are missing.
    pub fn require(&self) -> SyncResult<(&str, &Path)> {
        match (&self.spreadsheet_id, &self.credentials_file) {
            (Some(id), Some(path)) => Ok((id.as_str(), path.as_path())),
            _ => Err(SyncError::AuthFailed(
                "cloud mirror is not configured (spreadsheet id or credential file missing)"
                    .to_string(),
            )),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
