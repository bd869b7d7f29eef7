//! # Sale Routes
//!
//! Executes the sale transaction: stock decrement plus history append.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use stocktrack_core::validation::coerce_int;

use crate::error::ApiError;
use crate::state::SharedState;

// =============================================================================
// Payloads
// =============================================================================

/// Sale request. Both fields coerce from JSON numbers or numeric strings.
#[derive(Debug, Deserialize)]
pub struct SalePayload {
    pub item_id: serde_json::Value,
    pub quantity: serde_json::Value,
}

/// Sale response.
#[derive(Debug, Clone, Serialize)]
pub struct SaleResponse {
    pub success: bool,
    pub message: String,
    pub total_price: f64,
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/sales
pub async fn execute_sale(
    State(state): State<SharedState>,
    Json(payload): Json<SalePayload>,
) -> Result<Json<SaleResponse>, ApiError> {
    let item_id = coerce_int("item_id", &payload.item_id)?;
    let quantity = coerce_int("quantity", &payload.quantity)?;
    debug!(item_id = %item_id, quantity = %quantity, "execute_sale");

    let receipt = state.sales.sell(item_id, quantity)?;

    Ok(Json(SaleResponse {
        success: true,
        message: format!("Sale completed! Total: {}", receipt.total_price),
        total_price: receipt.total_price,
    }))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use stocktrack_store::NewItem;

    use crate::error::ErrorCode;
    use crate::test_support::test_state;

    fn seed(state: &crate::state::SharedState, on_hand: i64, unit_price: f64) -> i64 {
        state
            .ledger
            .create_item(NewItem {
                name: "Logitech Mouse".to_string(),
                on_hand,
                unit_price,
                reorder_threshold: 2,
            })
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_sale_reports_total_and_decrements_stock() {
        let (state, _dir) = test_state();
        let id = seed(&state, 10, 1500.0);

        let response = execute_sale(
            State(state.clone()),
            Json(SalePayload {
                item_id: json!(id),
                quantity: json!(4),
            }),
        )
        .await
        .unwrap();

        assert!(response.0.success);
        assert_eq!(response.0.total_price, 6000.0);
        assert_eq!(state.ledger.find_item(id).unwrap().on_hand, 6);
        assert_eq!(state.history.query(None, None).records.len(), 1);
    }

    #[tokio::test]
    async fn test_sale_coerces_string_fields() {
        let (state, _dir) = test_state();
        let id = seed(&state, 10, 10.0);

        let response = execute_sale(
            State(state),
            Json(SalePayload {
                item_id: json!(id.to_string()),
                quantity: json!("2"),
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.0.total_price, 20.0);
    }

    #[tokio::test]
    async fn test_insufficient_stock_is_rejected_with_amounts() {
        let (state, _dir) = test_state();
        let id = seed(&state, 3, 1500.0);

        let err = execute_sale(
            State(state.clone()),
            Json(SalePayload {
                item_id: json!(id),
                quantity: json!(5),
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(err.code, ErrorCode::InsufficientStock));
        assert!(err.message.contains("available 3"));
        assert!(err.message.contains("requested 5"));

        assert_eq!(state.ledger.find_item(id).unwrap().on_hand, 3);
        assert!(state.history.query(None, None).records.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_item_is_not_found() {
        let (state, _dir) = test_state();

        let err = execute_sale(
            State(state),
            Json(SalePayload {
                item_id: json!(99),
                quantity: json!(1),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err.code, ErrorCode::NotFound));
    }
}
