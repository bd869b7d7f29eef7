//! # History Routes
//!
//! Time-range filtered retrieval of the sale history with aggregate totals.

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use stocktrack_core::ValidationError;
use stocktrack_store::HistoryReport;

use crate::error::ApiError;
use crate::state::SharedState;

/// Date format accepted for the query bounds.
const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Query
// =============================================================================

/// Optional date window. Bounds are inclusive; `end_date` covers through
/// the end of that calendar day.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("expected {DATE_FORMAT}, got '{value}'"),
        }
    })
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/history?start_date=YYYY-MM-DD&end_date=YYYY-MM-DD
pub async fn query_history(
    State(state): State<SharedState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryReport>, ApiError> {
    debug!(start = ?query.start_date, end = ?query.end_date, "query_history");

    let start = query
        .start_date
        .as_deref()
        .map(|raw| parse_date("start_date", raw))
        .transpose()?;
    let end = query
        .end_date
        .as_deref()
        .map(|raw| parse_date("end_date", raw))
        .transpose()?;

    Ok(Json(state.history.query(start, end)))
}

// =============================================================================
// Unit Tests
// =============================================================================
