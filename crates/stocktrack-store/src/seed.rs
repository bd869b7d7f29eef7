//! # Seed Data
//!
//! Built-in sample rows used once at first start, when no stock file
//! exists and nothing could be pulled from the cloud mirror.

use stocktrack_core::Item;

/// The sample items seeded into a brand-new stock table.
pub fn default_items() -> Vec<Item> {
    vec![
        Item {
            id: 1,
            name: "Dell Laptop".to_string(),
            on_hand: 15,
            unit_price: 45000.0,
            reorder_threshold: 5,
        },
        Item {
            id: 2,
            name: "Logitech Mouse".to_string(),
            on_hand: 3,
            unit_price: 1500.0,
            reorder_threshold: 10,
        },
        Item {
            id: 3,
            name: "Mechanical Keyboard".to_string(),
            on_hand: 25,
            unit_price: 3500.0,
            reorder_threshold: 8,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_start_at_one_and_are_unique() {
        let items = default_items();
        let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
