//! # Sale Transaction Coordinator
//!
//! Validates a sale against current stock and, on accept, performs two
//! writes in sequence: the stock decrement, then the history append. The
//! pair is best-effort only. There is no atomicity across the two files
//! and no locking against a concurrent sale; if the history append fails
//! after the stock write succeeded, the decrement is durable and the sale
//! is missing from history. That inconsistency is surfaced in the error
//! and not repaired.

use chrono::{Local, Timelike};
use thiserror::Error;
use tracing::{info, warn};

use stocktrack_core::{quote_sale, CoreError, SaleRecord};

use crate::error::StoreError;
use crate::history::HistoryLog;
use crate::ledger::InventoryLedger;

// =============================================================================
// Sell Error
// =============================================================================

/// Everything `sell` can produce.
#[derive(Debug, Error)]
pub enum SellError {
    /// Rejected before any write: validation or insufficient stock.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Failed before the stock write became durable (lookup or stock save).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The stock decrement was saved but the history append failed. The
    /// sale happened as far as stock is concerned and is missing from
    /// history.
    #[error("Stock was updated but the sale could not be recorded in history: {source}")]
    HistoryNotRecorded {
        #[source]
        source: StoreError,
    },
}

// =============================================================================
// Sale Receipt
// =============================================================================

/// Outcome of a completed sale.
#[derive(Debug, Clone)]
pub struct SaleReceipt {
    pub item_name: String,
    pub quantity: i64,
    pub total_price: f64,
    pub record: SaleRecord,
}

// =============================================================================
// Sale Coordinator
// =============================================================================

/// Coordinates the stock decrement and the history append for one sale.
#[derive(Debug, Clone)]
pub struct SaleCoordinator {
    ledger: InventoryLedger,
    history: HistoryLog,
}

impl SaleCoordinator {
    /// Creates a coordinator over the ledger and history log.
    pub fn new(ledger: InventoryLedger, history: HistoryLog) -> Self {
        SaleCoordinator { ledger, history }
    }

    /// Executes a sale.
    ///
    /// ## Steps
    /// 1. Look up the item (`ItemNotFound` when absent)
    /// 2. Accept/reject via the pure sale decision (`InsufficientStock`
    ///    reports available and requested amounts)
    /// 3. Decrement `on_hand` in memory and rewrite the stock table
    /// 4. Append the sale record and rewrite the history table
    ///
    /// Steps 3 and 4 are sequential file writes with no atomicity across
    /// them; step 4 failing after step 3 yields [`SellError::HistoryNotRecorded`].
    pub fn sell(&self, item_id: i64, quantity: i64) -> Result<SaleReceipt, SellError> {
        let mut items = self.ledger.list_items();

        let slot = items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| StoreError::not_found(item_id))?;

        let quote = quote_sale(slot, quantity)?;

        slot.on_hand -= quote.quantity;
        self.ledger.save_all(&items)?;

        let record = SaleRecord {
            timestamp: sale_timestamp_now(),
            item_name: quote.item_name.clone(),
            quantity: quote.quantity,
            total_price: quote.total_price,
        };

        if let Err(source) = self.history.append(record.clone()) {
            warn!(
                item_id = %item_id,
                quantity = %quantity,
                error = %source,
                "Stock decremented but history append failed"
            );
            return Err(SellError::HistoryNotRecorded { source });
        }

        info!(
            item = %record.item_name,
            quantity = %record.quantity,
            total = %record.total_price,
            "Sale completed"
        );

        Ok(SaleReceipt {
            item_name: quote.item_name,
            quantity: quote.quantity,
            total_price: quote.total_price,
            record,
        })
    }
}

/// Current local time at second precision.
fn sale_timestamp_now() -> chrono::NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

// =============================================================================
// Unit Tests
// =============================================================================
