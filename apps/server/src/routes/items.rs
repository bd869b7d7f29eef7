//! # Item Routes
//!
//! CRUD over the stock table plus the low-stock alert list. Numeric payload
//! fields accept JSON numbers or numeric strings; failed coercion is a
//! validation error before anything touches the ledger.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use tracing::debug;

use stocktrack_core::validation::{
    coerce_int, coerce_price, validate_item_name, validate_on_hand, validate_reorder_threshold,
    validate_unit_price,
};
use stocktrack_core::{Item, ValidationError};
use stocktrack_store::NewItem;

use crate::error::ApiError;
use crate::routes::MessageResponse;
use crate::state::SharedState;

// =============================================================================
// Payload
// =============================================================================

/// Create/update payload. Numeric fields are raw JSON values until coerced.
#[derive(Debug, Deserialize)]
pub struct ItemPayload {
    pub name: String,
    pub on_hand: serde_json::Value,
    pub unit_price: serde_json::Value,
    pub reorder_threshold: serde_json::Value,
}

impl ItemPayload {
    fn into_fields(self) -> Result<NewItem, ValidationError> {
        Ok(NewItem {
            name: validate_item_name(&self.name)?,
            on_hand: validate_on_hand(coerce_int("on_hand", &self.on_hand)?)?,
            unit_price: validate_unit_price(coerce_price("unit_price", &self.unit_price)?)?,
            reorder_threshold: validate_reorder_threshold(coerce_int(
                "reorder_threshold",
                &self.reorder_threshold,
            )?)?,
        })
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/items
pub async fn list_items(State(state): State<SharedState>) -> Json<Vec<Item>> {
    Json(state.ledger.list_items())
}

/// POST /api/items
pub async fn create_item(
    State(state): State<SharedState>,
    Json(payload): Json<ItemPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    debug!(name = %payload.name, "create_item");

    let fields = payload.into_fields()?;
    let item = state.ledger.create_item(fields)?;

    Ok(Json(MessageResponse::ok(format!(
        "Item added successfully (id {})",
        item.id
    ))))
}

/// PUT /api/items/{id}
pub async fn update_item(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(payload): Json<ItemPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    debug!(id = %id, "update_item");

    let fields = payload.into_fields()?;
    state.ledger.update_item(id, fields)?;

    Ok(Json(MessageResponse::ok("Item updated successfully")))
}

/// DELETE /api/items/{id}
pub async fn delete_item(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    debug!(id = %id, "delete_item");

    state.ledger.delete_item(id)?;

    Ok(Json(MessageResponse::ok("Item deleted successfully")))
}

/// GET /api/alerts
pub async fn low_stock(State(state): State<SharedState>) -> Json<Vec<Item>> {
    Json(state.ledger.low_stock_items())
}

// =============================================================================
// Unit Tests
// =============================================================================
