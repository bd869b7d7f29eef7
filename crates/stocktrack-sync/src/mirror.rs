//! # Cloud Mirror
//!
//! Pushes the full local state of both tables to the remote spreadsheet
//! and pulls the remote state back to bootstrap or restore a local store.
//! Both tables are handled as black boxes (header + string rows); every
//! remote write is a worksheet-level clear-and-replace.
//!
//! ## Push Order
//! ```text
//! syncing ─► connectivity ─► local files exist ─► stock non-empty
//!         ─► authenticate ─► open spreadsheet
//!         ─► replace "stock" ─► replace "history" ─► online + stamp
//! ```
//!
//! Failure after the connectivity check leaves the status online with the
//! failure message; a failed connectivity check leaves it offline.

use tracing::{info, warn};

use stocktrack_store::{RawTable, TableFile};

use crate::config::MirrorConfig;
use crate::error::{SyncError, SyncResult};
use crate::probe::ConnectivityProbe;
use crate::sheets::SheetsClient;
use crate::status::{StatusHandle, SyncStatus};

/// Remote worksheet holding the stock table.
pub const STOCK_WORKSHEET: &str = "stock";

/// Remote worksheet holding the sale history table.
pub const HISTORY_WORKSHEET: &str = "history";

// =============================================================================
// Summaries
// =============================================================================

/// Row counts reported by a successful push.
#[derive(Debug, Clone, Copy)]
pub struct PushSummary {
    pub items: usize,
    pub sales: usize,
}

/// Row counts reported by a successful pull.
#[derive(Debug, Clone, Copy)]
pub struct PullSummary {
    pub items: usize,
    pub sales: usize,
}

// =============================================================================
// Cloud Mirror
// =============================================================================

/// Push/pull coordinator over the two local table files.
#[derive(Debug, Clone)]
pub struct CloudMirror {
    config: MirrorConfig,
    probe: ConnectivityProbe,
    status: StatusHandle,
    stock: TableFile,
    history: TableFile,
}

impl CloudMirror {
    /// Creates a mirror over the given tables.
    pub fn new(
        config: MirrorConfig,
        probe: ConnectivityProbe,
        status: StatusHandle,
        stock: TableFile,
        history: TableFile,
    ) -> Self {
        CloudMirror {
            config,
            probe,
            status,
            stock,
            history,
        }
    }

    /// The shared status handle.
    pub fn status(&self) -> &StatusHandle {
        &self.status
    }

    /// The connectivity probe.
    pub fn probe(&self) -> &ConnectivityProbe {
        &self.probe
    }

    // =========================================================================
    // Push
    // =========================================================================

    /// Replaces both remote worksheets with the full local tables.
    pub async fn push(&self) -> SyncResult<PushSummary> {
        self.status.set(SyncStatus::Syncing, "Sync in progress");

        match self.push_inner().await {
            Ok(summary) => {
                self.status.mark_synced(
                    SyncStatus::Online,
                    format!("Synced {} items, {} sales", summary.items, summary.sales),
                );
                info!(items = summary.items, sales = summary.sales, "Push complete");
                Ok(summary)
            }
            Err(err) => {
                self.settle_failure(&err);
                warn!(error = %err, "Push failed");
                Err(err)
            }
        }
    }

    async fn push_inner(&self) -> SyncResult<PushSummary> {
        if !self.probe.is_online().await {
            return Err(SyncError::NoConnectivity);
        }

        if !self.stock.exists() {
            return Err(SyncError::LocalFileMissing(self.stock.path().to_path_buf()));
        }
        if !self.history.exists() {
            return Err(SyncError::LocalFileMissing(
                self.history.path().to_path_buf(),
            ));
        }

        let stock = self
            .stock
            .read_raw()
            .ok_or_else(|| SyncError::LocalFileMissing(self.stock.path().to_path_buf()))?;
        if stock.rows.is_empty() {
            return Err(SyncError::EmptyStockGuard);
        }

        let history = self
            .history
            .read_raw()
            .unwrap_or_else(|| RawTable::empty(self.history.columns()));

        let (spreadsheet_id, credentials) = self.config.require()?;
        let client = SheetsClient::authorize(credentials).await?;
        let titles = client.worksheet_titles(spreadsheet_id).await?;

        replace_worksheet(&client, spreadsheet_id, &titles, STOCK_WORKSHEET, &stock).await?;
        replace_worksheet(&client, spreadsheet_id, &titles, HISTORY_WORKSHEET, &history).await?;

        Ok(PushSummary {
            items: stock.rows.len(),
            sales: history.rows.len(),
        })
    }

    // =========================================================================
    // Pull
    // =========================================================================

    /// Overwrites the local tables with the remote worksheet contents.
    ///
    /// The stock worksheet must exist with at least one data row; there is
    /// no safe empty default for stock. An absent or empty history
    /// worksheet yields a header-only local history file instead of a
    /// failure.
    pub async fn pull(&self) -> SyncResult<PullSummary> {
        self.status.set(SyncStatus::Syncing, "Restore in progress");

        match self.pull_inner().await {
            Ok(summary) => {
                self.status
                    .mark_synced(SyncStatus::Restored, "Restored from the cloud");
                info!(items = summary.items, sales = summary.sales, "Pull complete");
                Ok(summary)
            }
            Err(err) => {
                self.settle_failure(&err);
                warn!(error = %err, "Pull failed");
                Err(err)
            }
        }
    }

    async fn pull_inner(&self) -> SyncResult<PullSummary> {
        if !self.probe.is_online().await {
            return Err(SyncError::NoConnectivity);
        }

        let (spreadsheet_id, credentials) = self.config.require()?;
        let client = SheetsClient::authorize(credentials).await?;
        let titles = client.worksheet_titles(spreadsheet_id).await?;

        // Stock: remote state is authoritative and must be non-empty.
        if !titles.iter().any(|t| t == STOCK_WORKSHEET) {
            return Err(SyncError::WorksheetMissing(STOCK_WORKSHEET.to_string()));
        }
        let values = client.read_worksheet(spreadsheet_id, STOCK_WORKSHEET).await?;
        if values.len() <= 1 {
            return Err(SyncError::RemoteEmpty(STOCK_WORKSHEET.to_string()));
        }
        let mut stock = raw_from_values(values);
        coerce_numeric_columns(
            &mut stock,
            &[
                ("id", NumericKind::Integer),
                ("on_hand", NumericKind::Integer),
                ("unit_price", NumericKind::Decimal),
                ("reorder_threshold", NumericKind::Integer),
            ],
        );
        self.stock
            .write_raw(&stock)
            .map_err(|e| SyncError::Other(e.to_string()))?;
        let items = stock.rows.len();

        // History: an absent or empty worksheet degrades to an empty table.
        let sales = if titles.iter().any(|t| t == HISTORY_WORKSHEET) {
            let values = client
                .read_worksheet(spreadsheet_id, HISTORY_WORKSHEET)
                .await?;
            if values.len() > 1 {
                let mut history = raw_from_values(values);
                coerce_numeric_columns(
                    &mut history,
                    &[
                        ("quantity", NumericKind::Integer),
                        ("total_price", NumericKind::Decimal),
                    ],
                );
                self.history
                    .write_raw(&history)
                    .map_err(|e| SyncError::Other(e.to_string()))?;
                history.rows.len()
            } else {
                self.write_empty_history()?;
                0
            }
        } else {
            self.write_empty_history()?;
            0
        };

        Ok(PullSummary { items, sales })
    }

    fn write_empty_history(&self) -> SyncResult<()> {
        self.history
            .write_raw(&RawTable::empty(self.history.columns()))
            .map_err(|e| SyncError::Other(e.to_string()))
    }

    /// Status after a failed operation: offline for a failed connectivity
    /// check, online with the failure message otherwise.
    fn settle_failure(&self, err: &SyncError) {
        let status = if err.is_offline() {
            SyncStatus::Offline
        } else {
            SyncStatus::Online
        };
        self.status.set(status, err.to_string());
    }
}

// =============================================================================
// Worksheet Replacement
// =============================================================================

/// Creates the worksheet when absent, then clears and rewrites it with the
/// full table, header row first.
async fn replace_worksheet(
    client: &SheetsClient,
    spreadsheet_id: &str,
    existing_titles: &[String],
    title: &str,
    table: &RawTable,
) -> SyncResult<()> {
    if !existing_titles.iter().any(|t| t == title) {
        client.add_worksheet(spreadsheet_id, title).await?;
    }
    client.clear_worksheet(spreadsheet_id, title).await?;

    let mut values = Vec::with_capacity(table.rows.len() + 1);
    values.push(table.header.clone());
    values.extend(table.rows.iter().cloned());
    client.update_worksheet(spreadsheet_id, title, &values).await
}

// =============================================================================
// Numeric Re-Coercion
// =============================================================================

/// Numeric type a pulled column is coerced back to.
#[derive(Debug, Clone, Copy)]
enum NumericKind {
    Integer,
    Decimal,
}

/// Splits remote cell values into header + data rows.
fn raw_from_values(mut values: Vec<Vec<String>>) -> RawTable {
    let header = values.remove(0);
    RawTable {
        header,
        rows: values,
    }
}

/// Re-coerces the named columns to their numeric type, leaving
/// unconvertible cells empty ("missing").
fn coerce_numeric_columns(table: &mut RawTable, specs: &[(&str, NumericKind)]) {
    for (name, kind) in specs {
        let Some(index) = table.header.iter().position(|h| h == name) else {
            continue;
        };
        for row in &mut table.rows {
            if let Some(cell) = row.get_mut(index) {
                *cell = coerce_cell(cell, *kind);
            }
        }
    }
}

fn coerce_cell(cell: &str, kind: NumericKind) -> String {
    let trimmed = cell.trim();
    match kind {
        NumericKind::Integer => {
            if trimmed.parse::<i64>().is_ok() {
                return trimmed.to_string();
            }
            match trimmed.parse::<f64>() {
                Ok(f) if f.fract() == 0.0 && f.is_finite() => (f as i64).to_string(),
                _ => String::new(),
            }
        }
        NumericKind::Decimal => match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() => trimmed.to_string(),
            _ => String::new(),
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
