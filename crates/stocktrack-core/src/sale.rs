//! # Sale Decision
//!
//! Pure accept/reject decision for a sale against a current stock snapshot.
//!
//! The file-writing half of the transaction lives in the store crate; this
//! module only decides whether a sale is valid and what it costs, so the
//! decision is testable without touching any table.

use crate::error::{CoreError, CoreResult};
use crate::types::Item;
use crate::validation::validate_sale_quantity;

// =============================================================================
// Sale Quote
// =============================================================================

/// The accepted terms of a sale, computed from a stock snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleQuote {
    /// Item name snapshot, to be copied into the history record.
    pub item_name: String,

    /// Quantity to deduct from `on_hand`.
    pub quantity: i64,

    /// Unit price at time of sale.
    pub unit_price: f64,

    /// `unit_price × quantity`.
    pub total_price: f64,
}

// =============================================================================
// Decision
// =============================================================================

/// Decides a sale against the item's current state.
///
/// ## Rules
/// - `quantity` must be positive
/// - `quantity` must not exceed `item.on_hand`; rejection reports both the
///   available and requested amounts
///
/// The item itself is not modified; the caller applies the decrement.
pub fn quote_sale(item: &Item, quantity: i64) -> CoreResult<SaleQuote> {
    let quantity = validate_sale_quantity(quantity)?;

    if quantity > item.on_hand {
        return Err(CoreError::InsufficientStock {
            name: item.name.clone(),
            available: item.on_hand,
            requested: quantity,
        });
    }

    Ok(SaleQuote {
        item_name: item.name.clone(),
        quantity,
        unit_price: item.unit_price,
        total_price: item.unit_price * quantity as f64,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(on_hand: i64, unit_price: f64) -> Item {
        Item {
            id: 7,
            name: "Mechanical Keyboard".to_string(),
            on_hand,
            unit_price,
            reorder_threshold: 8,
        }
    }

    #[test]
    fn test_quote_within_stock() {
        let quote = quote_sale(&item(25, 3500.0), 4).unwrap();
        assert_eq!(quote.item_name, "Mechanical Keyboard");
        assert_eq!(quote.quantity, 4);
        assert_eq!(quote.total_price, 14000.0);
    }

    #[test]
    fn test_quote_exact_stock_is_accepted() {
        let quote = quote_sale(&item(4, 10.0), 4).unwrap();
        assert_eq!(quote.total_price, 40.0);
    }

    #[test]
    fn test_quote_over_stock_reports_both_amounts() {
        let err = quote_sale(&item(3, 1500.0), 5).unwrap_err();
        match err {
            CoreError::InsufficientStock {
                available,
                requested,
                ..
            } => {
                assert_eq!(available, 3);
                assert_eq!(requested, 5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_quote_rejects_non_positive_quantity() {
        assert!(matches!(
            quote_sale(&item(10, 1.0), 0),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            quote_sale(&item(10, 1.0), -1),
            Err(CoreError::Validation(_))
        ));
    }
}
