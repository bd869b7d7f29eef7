//! # Routes
//!
//! JSON API surface, one module per area:
//!
//! - [`items`] - stock CRUD + low-stock alerts
//! - [`sales`] - sale execution
//! - [`history`] - sale history queries
//! - [`sync`] - cloud mirror status / push / pull

use axum::routing::{get, post, put};
use axum::Router;
use serde::Serialize;

use crate::state::SharedState;

pub mod history;
pub mod items;
pub mod sales;
pub mod sync;

/// Builds the API router.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/items", get(items::list_items).post(items::create_item))
        .route(
            "/api/items/{id}",
            put(items::update_item).delete(items::delete_item),
        )
        .route("/api/alerts", get(items::low_stock))
        .route("/api/sales", post(sales::execute_sale))
        .route("/api/history", get(history::query_history))
        .route("/api/sync/status", get(sync::status))
        .route("/api/sync/push", post(sync::push))
        .route("/api/sync/pull", post(sync::pull))
        .with_state(state)
}

/// Standard success envelope for mutations.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    /// A success response with the given message.
    pub fn ok(message: impl Into<String>) -> Self {
        MessageResponse {
            success: true,
            message: message.into(),
        }
    }
}
