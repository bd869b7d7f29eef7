//! # Storage Error Types
//!
//! Error types for the file-backed tables.
//!
//! Reads never produce errors here: an unreadable table degrades to an
//! empty one with a logged warning. Writes fail loudly, and a locked
//! destination file gets its own variant because the fix ("close the other
//! program") is different from every other write failure.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row in the stock table has the requested id.
    #[error("Item not found: {id}")]
    ItemNotFound { id: i64 },

    /// The destination file is held open exclusively by another process.
    ///
    /// Typically a spreadsheet program with the table open.
    #[error("Cannot write {path}: the file is locked. Close any program that has it open")]
    FileLocked { path: PathBuf },

    /// Any other save failure, with the cause text.
    #[error("Cannot write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },
}

impl StoreError {
    /// Creates an ItemNotFound error.
    pub fn not_found(id: i64) -> Self {
        StoreError::ItemNotFound { id }
    }

    /// True for failures caused by the caller (unknown id), as opposed to
    /// failures of the underlying medium.
    pub fn is_client_error(&self) -> bool {
        matches!(self, StoreError::ItemNotFound { .. })
    }

    /// Classifies an I/O failure on `path` into the locked-file case or a
    /// generic write failure.
    pub(crate) fn from_io(path: &Path, err: &std::io::Error) -> Self {
        // Windows reports a file opened exclusively by another program as a
        // sharing violation (os error 32); Unix surfaces permission denied.
        let locked = err.kind() == std::io::ErrorKind::PermissionDenied
            || err.raw_os_error() == Some(32);

        if locked {
            StoreError::FileLocked {
                path: path.to_path_buf(),
            }
        } else {
            StoreError::WriteFailed {
                path: path.to_path_buf(),
                reason: err.to_string(),
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

    #[test]
    fn test_locked_file_message_instructs_user() {
        let err = StoreError::FileLocked {
            path: PathBuf::from("data/stock.csv"),
        };
        let msg = err.to_string();
        assert!(msg.contains("locked"));
        assert!(msg.contains("Close any program"));
    }

    #[test]
    fn test_permission_denied_maps_to_file_locked() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StoreError::from_io(Path::new("data/stock.csv"), &io);
        assert!(matches!(err, StoreError::FileLocked { .. }));
    }

    #[test]
    fn test_other_io_maps_to_write_failed() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = StoreError::from_io(Path::new("data/stock.csv"), &io);
        match err {
            StoreError::WriteFailed { reason, .. } => assert!(reason.contains("disk full")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_client_error_split() {
        assert!(StoreError::not_found(9).is_client_error());
        assert!(!StoreError::FileLocked {
            path: PathBuf::from("x")
        }
        .is_client_error());
    }
}
