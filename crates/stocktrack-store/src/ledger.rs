//! # Inventory Ledger
//!
//! Owns the stock table's mutation path. Every mutating operation loads the
//! whole table, modifies it in memory, and saves the whole table back; a
//! save failure surfaces to the caller and the in-memory change is simply
//! discarded, because the next operation rereads the file.
//!
//! ## Id Assignment
//! `create_item` assigns `max(existing ids) + 1`, or `1` for an empty
//! table. Deleting and re-adding reuses the max+1 scheme, so ids are unique
//! but not necessarily contiguous.

use tracing::{debug, info};

use stocktrack_core::Item;

use crate::error::{StoreError, StoreResult};
use crate::table::TableFile;

// =============================================================================
// New Item
// =============================================================================

/// Field set for creating or fully overwriting an item.
///
/// Already validated and coerced by the caller; the ledger itself only
/// assigns ids and persists.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub on_hand: i64,
    pub unit_price: f64,
    pub reorder_threshold: i64,
}

// =============================================================================
// Inventory Ledger
// =============================================================================

/// Ledger over the stock table.
#[derive(Debug, Clone)]
pub struct InventoryLedger {
    table: TableFile,
}

impl InventoryLedger {
    /// Creates a ledger over the given stock table file.
    pub fn new(table: TableFile) -> Self {
        InventoryLedger { table }
    }

    /// The underlying table file.
    pub fn table(&self) -> &TableFile {
        &self.table
    }

    /// Full current snapshot, in table order.
    pub fn list_items(&self) -> Vec<Item> {
        self.table.load()
    }

    /// Looks up a single item by id.
    pub fn find_item(&self, id: i64) -> Option<Item> {
        self.list_items().into_iter().find(|item| item.id == id)
    }

    /// All items with `on_hand <= reorder_threshold`, inclusive boundary.
    pub fn low_stock_items(&self) -> Vec<Item> {
        self.list_items()
            .into_iter()
            .filter(Item::is_low_stock)
            .collect()
    }

    /// Creates a new item with id `max(existing) + 1` (1 for an empty table).
    pub fn create_item(&self, fields: NewItem) -> StoreResult<Item> {
        let mut items = self.list_items();

        let id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        let item = Item {
            id,
            name: fields.name,
            on_hand: fields.on_hand,
            unit_price: fields.unit_price,
            reorder_threshold: fields.reorder_threshold,
        };

        debug!(id = %id, name = %item.name, "Creating item");
        items.push(item.clone());
        self.save_all(&items)?;

        info!(id = %id, name = %item.name, "Item created");
        Ok(item)
    }

    /// Replaces all fields of the item with the given id (full overwrite).
    pub fn update_item(&self, id: i64, fields: NewItem) -> StoreResult<Item> {
        let mut items = self.list_items();

        let slot = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;

        slot.name = fields.name;
        slot.on_hand = fields.on_hand;
        slot.unit_price = fields.unit_price;
        slot.reorder_threshold = fields.reorder_threshold;
        let updated = slot.clone();

        self.save_all(&items)?;

        info!(id = %id, "Item updated");
        Ok(updated)
    }

    /// Deletes the item with the given id.
    pub fn delete_item(&self, id: i64) -> StoreResult<()> {
        let mut items = self.list_items();

        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(StoreError::not_found(id));
        }

        self.save_all(&items)?;

        info!(id = %id, "Item deleted");
        Ok(())
    }

    /// Rewrites the whole stock table.
    ///
    /// The single persistence point for every stock mutation, including the
    /// sale coordinator's decrement.
    pub(crate) fn save_all(&self, items: &[Item]) -> StoreResult<()> {
        self.table.save(items)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stocktrack_core::STOCK_COLUMNS;

    fn ledger(dir: &tempfile::TempDir) -> InventoryLedger {
        InventoryLedger::new(TableFile::new(dir.path().join("stock.csv"), &STOCK_COLUMNS))
    }

    fn fields(name: &str, on_hand: i64) -> NewItem {
        NewItem {
            name: name.to_string(),
            on_hand,
            unit_price: 100.0,
            reorder_threshold: 5,
        }
    }

    #[test]
    fn test_create_on_empty_table_assigns_id_1() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ledger(&dir);

        let item = ledger.create_item(fields("Dell Laptop", 15)).unwrap();
        assert_eq!(item.id, 1);
    }

    #[test]
    fn test_create_assigns_max_plus_one_across_gaps() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ledger(&dir);

        ledger.create_item(fields("A", 1)).unwrap();
        ledger.create_item(fields("B", 1)).unwrap();
        ledger.create_item(fields("C", 1)).unwrap();

        // A gap in the middle does not change the max.
        ledger.delete_item(2).unwrap();
        let item = ledger.create_item(fields("D", 1)).unwrap();
        assert_eq!(item.id, 4);

        // Deleting the max makes its id reusable via max+1 over the rest.
        ledger.delete_item(4).unwrap();
        let item = ledger.create_item(fields("E", 1)).unwrap();
        assert_eq!(item.id, 4);
    }

    #[test]
    fn test_ids_present_equal_created_minus_deleted() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ledger(&dir);

        for name in ["A", "B", "C", "D"] {
            ledger.create_item(fields(name, 1)).unwrap();
        }
        ledger.delete_item(1).unwrap();
        ledger.delete_item(3).unwrap();

        let ids: Vec<i64> = ledger.list_items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_update_is_full_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ledger(&dir);

        ledger.create_item(fields("Old Name", 10)).unwrap();
        let updated = ledger
            .update_item(
                1,
                NewItem {
                    name: "New Name".to_string(),
                    on_hand: 2,
                    unit_price: 9.5,
                    reorder_threshold: 1,
                },
            )
            .unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "New Name");
        assert_eq!(updated.on_hand, 2);
        assert_eq!(updated.unit_price, 9.5);
        assert_eq!(updated.reorder_threshold, 1);
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ledger(&dir);
        assert!(matches!(
            ledger.update_item(42, fields("X", 1)),
            Err(StoreError::ItemNotFound { id: 42 })
        ));
    }

    #[test]
    fn test_delete_unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ledger(&dir);
        assert!(matches!(
            ledger.delete_item(42),
            Err(StoreError::ItemNotFound { id: 42 })
        ));
    }

    #[test]
    fn test_low_stock_boundary_is_inclusive() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ledger(&dir);

        ledger
            .create_item(NewItem {
                name: "At threshold".to_string(),
                on_hand: 5,
                unit_price: 1.0,
                reorder_threshold: 5,
            })
            .unwrap();
        ledger
            .create_item(NewItem {
                name: "Above threshold".to_string(),
                on_hand: 6,
                unit_price: 1.0,
                reorder_threshold: 5,
            })
            .unwrap();
        ledger
            .create_item(NewItem {
                name: "Below threshold".to_string(),
                on_hand: 0,
                unit_price: 1.0,
                reorder_threshold: 5,
            })
            .unwrap();

        let names: Vec<String> = ledger
            .low_stock_items()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["At threshold", "Below threshold"]);
    }

    #[test]
    fn test_mutations_are_visible_through_a_fresh_handle() {
        let dir = tempfile::tempdir().unwrap();
        let first = ledger(&dir);
        first.create_item(fields("Shared", 7)).unwrap();

        // The file is the single source of truth: a second handle over the
        // same path sees the rewrite.
        let second = ledger(&dir);
        let items = second.list_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Shared");
    }
}
