//! # Domain Types
//!
//! Core domain types for the inventory tracker.
//!
//! ## Persisted Tables
//! ```text
//! ┌──────────────────────────────────┐  ┌──────────────────────────────────┐
//! │           stock table            │  │          history table           │
//! │  ──────────────────────────────  │  │  ──────────────────────────────  │
//! │  id (i64, max+1 assignment)      │  │  timestamp (fixed format)        │
//! │  name                            │  │  item_name (name snapshot)       │
//! │  on_hand (i64 >= 0)              │  │  quantity (i64 > 0)              │
//! │  unit_price (decimal >= 0)       │  │  total_price (qty × unit price)  │
//! │  reorder_threshold (i64 >= 0)    │  │                                  │
//! └──────────────────────────────────┘  └──────────────────────────────────┘
//! ```
//!
//! Both types serialize identically to CSV rows and JSON API payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// =============================================================================
// Item
// =============================================================================

/// A stocked product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned by the ledger as max existing id + 1.
    ///
    /// Ids are unique for the lifetime of the table but not necessarily
    /// contiguous: deleting the max id and re-adding reuses max+1 over the
    /// remaining rows.
    pub id: i64,

    /// Display name. Copied into history rows at sale time.
    pub name: String,

    /// Current on-hand quantity. Never negative after a completed sale.
    pub on_hand: i64,

    /// Unit price as a non-negative decimal.
    pub unit_price: f64,

    /// Low-stock alert threshold. An item with `on_hand <= reorder_threshold`
    /// is a low-stock alert, inclusive boundary.
    pub reorder_threshold: i64,
}

impl Item {
    /// True when this item should appear in the low-stock alert list.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.on_hand <= self.reorder_threshold
    }
}

// =============================================================================
// Sale Record
// =============================================================================

/// An append-only row in the sale history table.
///
/// `item_name` is a snapshot of the item's name at sale time, not a
/// reference to the id. Renaming or deleting an item afterwards does not
/// change historical records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Local-clock timestamp, second precision, fixed format.
    #[serde(with = "sale_timestamp")]
    pub timestamp: NaiveDateTime,

    /// Item name snapshot at time of sale.
    pub item_name: String,

    /// Quantity sold (always positive).
    pub quantity: i64,

    /// `quantity × unit_price` at time of sale.
    pub total_price: f64,
}

// =============================================================================
// Timestamp Serde
// =============================================================================

/// Serde adapter for the fixed-width sale timestamp.
///
/// Keeps the persisted string identical across the CSV files, the JSON API,
/// and the remote worksheet cells.
pub mod sale_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::TIMESTAMP_FORMAT;

    pub fn serialize<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT)
            .map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
