//! # API Error Type
//!
//! Unified error type for the HTTP handlers.
//!
//! ## Error Flow
//! ```text
//! CoreError / StoreError / SellError / SyncError
//!        │
//!        ▼
//! ApiError { code, message }  ← this module, one From impl per source
//!        │
//!        ▼
//! { "success": false, "code": "...", "message": "..." }  + status code
//! ```
//!
//! Status codes split client-caused failures (validation, unknown id,
//! insufficient stock) from environment-caused ones (unwritable medium,
//! unreachable or failing remote service). Nothing here terminates the
//! process; every component error becomes a structured response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use stocktrack_core::{CoreError, ValidationError};
use stocktrack_store::{SellError, StoreError};
use stocktrack_sync::SyncError;

// =============================================================================
// API Error
// =============================================================================

/// Error returned from any handler.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable error code.
    pub code: ErrorCode,

    /// Human-readable message for display.
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown item id (404).
    NotFound,

    /// Malformed input (400).
    ValidationError,

    /// Sale rejected: requested more than on hand (400).
    InsufficientStock,

    /// The table file could not be written (500).
    PersistenceError,

    /// Cloud unreachable (503).
    NoConnectivity,

    /// Remote spreadsheet authentication failed (502).
    AuthError,

    /// Spreadsheet or required worksheet absent or empty remotely (502).
    RemoteNotFound,

    /// Push refused because the local stock table is empty (409).
    EmptyGuard,

    /// Any other sync failure (502).
    SyncFailed,
}

impl ErrorCode {
    fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError | ErrorCode::InsufficientStock => StatusCode::BAD_REQUEST,
            ErrorCode::PersistenceError => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::NoConnectivity => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::AuthError | ErrorCode::RemoteNotFound | ErrorCode::SyncFailed => {
                StatusCode::BAD_GATEWAY
            }
            ErrorCode::EmptyGuard => StatusCode::CONFLICT,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "code": self.code,
            "message": self.message,
        }));
        (self.code.status(), body).into_response()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::new(ErrorCode::ValidationError, err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InsufficientStock { .. } => {
                ApiError::new(ErrorCode::InsufficientStock, err.to_string())
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ItemNotFound { .. } => ApiError::new(ErrorCode::NotFound, err.to_string()),
            StoreError::FileLocked { .. } | StoreError::WriteFailed { .. } => {
                ApiError::new(ErrorCode::PersistenceError, err.to_string())
            }
        }
    }
}

impl From<SellError> for ApiError {
    fn from(err: SellError) -> Self {
        match err {
            SellError::Core(e) => e.into(),
            SellError::Store(e) => e.into(),
            // The message carries the stock-updated-but-unrecorded detail.
            SellError::HistoryNotRecorded { .. } => {
                ApiError::new(ErrorCode::PersistenceError, err.to_string())
            }
        }
    }
}

impl From<SyncError> for ApiError {
    fn from(err: SyncError) -> Self {
        let code = match err {
            SyncError::NoConnectivity => ErrorCode::NoConnectivity,
            SyncError::AuthFailed(_) => ErrorCode::AuthError,
            SyncError::SpreadsheetNotFound(_)
            | SyncError::WorksheetMissing(_)
            | SyncError::RemoteEmpty(_) => ErrorCode::RemoteNotFound,
            SyncError::EmptyStockGuard => ErrorCode::EmptyGuard,
            SyncError::LocalFileMissing(_) => ErrorCode::PersistenceError,
            SyncError::Api(_) | SyncError::Other(_) => ErrorCode::SyncFailed,
        };
        ApiError::new(code, err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
