//! # Sync Routes
//!
//! Cloud mirror surface: status indicator plus manual push and pull
//! triggers. There is no automatic retry anywhere; re-triggering a failed
//! sync is the caller's responsibility.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::debug;

use stocktrack_sync::StatusSnapshot;

use crate::error::ApiError;
use crate::routes::MessageResponse;
use crate::state::SharedState;

// =============================================================================
// Responses
// =============================================================================

/// Push response with the row counts that were mirrored.
#[derive(Debug, Clone, Serialize)]
pub struct PushResponse {
    pub success: bool,
    pub message: String,
    pub items: usize,
    pub sales: usize,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/sync/status
///
/// Reading the status re-probes connectivity unless an operation is mid
/// flight, so the indicator flips offline/online on its own.
pub async fn status(State(state): State<SharedState>) -> Json<StatusSnapshot> {
    let snapshot = state
        .mirror
        .status()
        .refreshed(state.mirror.probe())
        .await;
    debug!(status = ?snapshot.status, "sync_status");
    Json(snapshot)
}

/// POST /api/sync/push
pub async fn push(State(state): State<SharedState>) -> Result<Json<PushResponse>, ApiError> {
    let summary = state.mirror.push().await?;

    Ok(Json(PushResponse {
        success: true,
        message: format!(
            "Sync successful ({} items, {} sales)",
            summary.items, summary.sales
        ),
        items: summary.items,
        sales: summary.sales,
    }))
}

/// POST /api/sync/pull
pub async fn pull(State(state): State<SharedState>) -> Result<Json<MessageResponse>, ApiError> {
    let summary = state.mirror.pull().await?;

    Ok(Json(MessageResponse::ok(format!(
        "Data restored from the cloud ({} items, {} sales)",
        summary.items, summary.sales
    ))))
}
