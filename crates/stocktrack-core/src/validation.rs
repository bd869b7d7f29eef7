//! # Validation Module
//!
//! Input validation and numeric coercion for the inventory tracker.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: HTTP handler (deserialization)                            │
//! │  ├── Shape checks (required JSON fields)                            │
//! │  └── Numeric fields arrive as serde_json::Value                    │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE                                               │
//! │  ├── Coercion: JSON number or numeric string → i64 / f64           │
//! │  └── Range rules: non-negative stock, positive sale quantity        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The coercion step exists because clients send numeric fields both as
//! numbers and as form-sourced strings; either form must coerce or fail
//! with a [`ValidationError::NotNumeric`].

use serde_json::Value;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
///
/// Returns the trimmed name.
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Coercion
// =============================================================================

/// Coerces a JSON value to an integer.
///
/// Accepts JSON integers, integral floats (`15.0`), and numeric strings
/// (`"15"`, `" 15 "`). Anything else fails with `NotNumeric`.
pub fn coerce_int(field: &str, value: &Value) -> ValidationResult<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 && f.is_finite() {
                    return Ok(f as i64);
                }
            }
            Err(not_numeric(field, value))
        }
        Value::String(s) => {
            let s = s.trim();
            if let Ok(i) = s.parse::<i64>() {
                return Ok(i);
            }
            match s.parse::<f64>() {
                Ok(f) if f.fract() == 0.0 && f.is_finite() => Ok(f as i64),
                _ => Err(not_numeric(field, value)),
            }
        }
        _ => Err(not_numeric(field, value)),
    }
}

/// Coerces a JSON value to a decimal price.
///
/// Accepts JSON numbers and numeric strings.
pub fn coerce_price(field: &str, value: &Value) -> ValidationResult<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .filter(|f| f.is_finite())
            .ok_or_else(|| not_numeric(field, value)),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(f),
            _ => Err(not_numeric(field, value)),
        },
        _ => Err(not_numeric(field, value)),
    }
}

fn not_numeric(field: &str, value: &Value) -> ValidationError {
    let rendered = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    ValidationError::NotNumeric {
        field: field.to_string(),
        value: rendered,
    }
}

// =============================================================================
// Range Validators
// =============================================================================

/// Validates an on-hand quantity (`>= 0`).
pub fn validate_on_hand(on_hand: i64) -> ValidationResult<i64> {
    if on_hand < 0 {
        return Err(ValidationError::Negative {
            field: "on_hand".to_string(),
        });
    }
    Ok(on_hand)
}

/// Validates a unit price (`>= 0`).
pub fn validate_unit_price(unit_price: f64) -> ValidationResult<f64> {
    if unit_price < 0.0 {
        return Err(ValidationError::Negative {
            field: "unit_price".to_string(),
        });
    }
    Ok(unit_price)
}

/// Validates a reorder threshold (`>= 0`).
pub fn validate_reorder_threshold(threshold: i64) -> ValidationResult<i64> {
    if threshold < 0 {
        return Err(ValidationError::Negative {
            field: "reorder_threshold".to_string(),
        });
    }
    Ok(threshold)
}

/// Validates a sale quantity (`> 0`).
pub fn validate_sale_quantity(quantity: i64) -> ValidationResult<i64> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    Ok(quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================
