//! # Error Types
//!
//! Domain-specific error types for stocktrack-core.
//!
//! ## Error Flow
//! ```text
//! ValidationError → CoreError → StoreError/SellError → ApiError → client
//! ```
//!
//! Each operation's signature declares exactly which kinds it can produce;
//! callers pattern-match on variants rather than inspecting strings.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Requested sale quantity exceeds the on-hand quantity.
    ///
    /// Carries both amounts so the caller can report them verbatim.
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Input validation failure (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Produced before any business logic runs. Numeric fields arrive as JSON
/// numbers or numeric strings and are coerced; a failed coercion is a
/// [`ValidationError::NotNumeric`].
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Field cannot be coerced to its required numeric type.
    #[error("{field} is not a valid number: '{value}'")]
    NotNumeric { field: String, value: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., a date bound that does not parse).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
