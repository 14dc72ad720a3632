//! # Domain Types
//!
//! Core domain types used throughout Bakery POS.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │      Pick       │   │      Bill       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  item_id        │   │  lines          │       │
//! │  │  name           │   │  quantity       │   │  total          │       │
//! │  │  price (f64)    │   └─────────────────┘   │  closed_at      │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Item` values are only created by [`crate::repository::ItemRepository::add`];
//! the store file is the other source, via deserialization.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Item
// =============================================================================

/// A priced item on sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique, immutable identifier. Assigned as max existing ID + 1.
    pub id: u32,

    /// Display name. Trimmed, unique under case-insensitive comparison.
    pub name: String,

    /// Unit price in the store's base currency unit. Never negative.
    pub price: f64,
}

impl Item {
    /// Checks whether this item's name matches `name` ignoring case.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Tab-separated row used by the item listing. Whole prices keep their
/// `.0` (`10.0`, not `10`).
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{:?}", self.id, self.name, self.price)
    }
}

// =============================================================================
// Pick
// =============================================================================

/// One (item ID, quantity) entry submitted during billing.
///
/// Quantity is signed so that a negative entry can be rejected explicitly
/// instead of being unrepresentable at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pick {
    pub item_id: u32,
    pub quantity: i64,
}

impl Pick {
    #[inline]
    pub const fn new(item_id: u32, quantity: i64) -> Self {
        Pick { item_id, quantity }
    }
}

// =============================================================================
// Bill
// =============================================================================

/// A line of a bill.
/// Uses snapshot pattern to freeze item data at the time of the pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillLine {
    pub item_id: u32,
    /// Item name at time of pick (frozen).
    pub name: String,
    /// Unit price at time of pick (frozen).
    pub unit_price: f64,
    pub quantity: i64,
    /// unit_price × quantity.
    pub line_total: f64,
}

/// The closed result of a billing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub lines: Vec<BillLine>,
    /// Sum of every line total; 0.0 when there are no lines.
    pub total: f64,
    pub closed_at: DateTime<Utc>,
}

impl Bill {
    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_matches_ignores_case() {
        let item = Item {
            id: 1,
            name: "Croissant".to_string(),
            price: 2.5,
        };
        assert!(item.name_matches("croissant"));
        assert!(item.name_matches("CROISSANT"));
        assert!(!item.name_matches("Croissants"));
    }

    #[test]
    fn test_item_display_row() {
        let item = Item {
            id: 3,
            name: "Bun".to_string(),
            price: 1.5,
        };
        assert_eq!(item.to_string(), "3\tBun\t1.5");

        let whole = Item {
            id: 4,
            name: "Cake".to_string(),
            price: 10.0,
        };
        assert_eq!(whole.to_string(), "4\tCake\t10.0");
    }

    #[test]
    fn test_item_json_shape() {
        let item = Item {
            id: 7,
            name: "Cake".to_string(),
            price: 10.0,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Cake");
        assert_eq!(json["price"], 10.0);
    }
}
