//! # Item Repository
//!
//! The in-memory, validated view of the store used during one operation.
//!
//! ## Load / Mutate / Save Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Operation                                        │
//! │                                                                         │
//! │  RecordStore::load() ──► Vec<Item>                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ItemRepository::new(items)  ← THIS MODULE                             │
//! │  ├── add(name, price)                                                  │
//! │  ├── find_by_id(id) / find_by_name_or_id(token)                        │
//! │  ├── update(id, name?, price?)                                         │
//! │  └── remove(id)                                                        │
//! │       │                                                                 │
//! │       ▼  (only on success)                                             │
//! │  RecordStore::save(repo.into_items())                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! After every successful mutation: IDs are distinct, names are distinct
//! ignoring case, and no price is negative. Every failing call returns
//! before touching the list.

use tracing::debug;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Item;
use crate::validation::{classify_token, validate_item_name, validate_price, SearchToken};
use crate::FIRST_ITEM_ID;

/// Returns one greater than the highest ID present, or 1 for an empty list.
///
/// IDs are derived from the current maximum, so deleting an item below the
/// maximum never frees its ID.
///
/// Fails with `IdSpaceExhausted` when the highest ID is already `u32::MAX`.
///
/// ## Example
/// ```rust
/// use bakery_core::repository::next_id;
///
/// assert_eq!(next_id(&[]), Ok(1));
/// ```
pub fn next_id(items: &[Item]) -> CoreResult<u32> {
    match items.iter().map(|item| item.id).max() {
        None => Ok(FIRST_ITEM_ID),
        Some(max) => max
            .checked_add(1)
            .ok_or(CoreError::IdSpaceExhausted { max }),
    }
}

/// Result of [`ItemRepository::update`].
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    /// The item after the update.
    pub item: Item,
    /// A new price was supplied but rejected, so the old price was kept.
    pub price_rejected: bool,
}

/// Repository over one loaded snapshot of the store.
///
/// ## Usage
/// ```rust
/// use bakery_core::ItemRepository;
///
/// let mut repo = ItemRepository::new(Vec::new());
/// let bun = repo.add("Bun", 1.5).unwrap();
/// assert_eq!(bun.id, 1);
/// assert!(repo.remove(bun.id));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemRepository {
    items: Vec<Item>,
}

impl ItemRepository {
    /// Wraps a loaded snapshot. The snapshot is taken as-is; a hand-edited
    /// store with duplicates is tolerated by every lookup.
    pub fn new(items: Vec<Item>) -> Self {
        ItemRepository { items }
    }

    /// Items in store order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Consumes the repository, returning the snapshot to be saved.
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// ID the next added item will receive.
    pub fn next_id(&self) -> CoreResult<u32> {
        next_id(&self.items)
    }

    /// Adds a new item and returns it.
    ///
    /// ## Checks (in order)
    /// 1. Name empty after trim → `EmptyName`
    /// 2. Name already used, ignoring case → `DuplicateName`
    /// 3. Price negative or not finite → `InvalidPrice`
    /// 4. No ID left above the current maximum → `IdSpaceExhausted`
    ///
    /// The caller is responsible for persisting.
    pub fn add(&mut self, name: &str, price: f64) -> CoreResult<Item> {
        let name = validate_item_name(name)?;

        if self.items.iter().any(|item| item.name_matches(&name)) {
            return Err(ValidationError::DuplicateName { name }.into());
        }

        let price = validate_price(price)?;
        let id = self.next_id()?;

        let item = Item {
            id,
            name,
            price,
        };
        debug!(id = item.id, name = %item.name, "Adding item");

        self.items.push(item.clone());
        Ok(item)
    }

    /// Gets an item by its ID.
    pub fn find_by_id(&self, id: u32) -> CoreResult<&Item> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(CoreError::ItemNotFound(id))
    }

    /// Searches by ID when the token is an integer, otherwise by exact name
    /// ignoring case. Returns every match.
    pub fn find_by_name_or_id(&self, token: &str) -> Vec<&Item> {
        match classify_token(token) {
            SearchToken::Id(id) => self
                .items
                .iter()
                .filter(|item| i64::from(item.id) == id)
                .collect(),
            SearchToken::Name(name) => self
                .items
                .iter()
                .filter(|item| item.name_matches(&name))
                .collect(),
        }
    }

    /// Updates an item's name and/or price.
    ///
    /// ## Behavior
    /// - `new_name`: applied when non-empty after trim. Uniqueness is NOT
    ///   re-checked here, unlike [`ItemRepository::add`].
    /// - `new_price`: applied when finite and `>= 0`; otherwise the old
    ///   price is kept and `price_rejected` is set. A rejected price never
    ///   fails the update, and a name change still applies.
    pub fn update(
        &mut self,
        id: u32,
        new_name: Option<&str>,
        new_price: Option<f64>,
    ) -> CoreResult<UpdateOutcome> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(CoreError::ItemNotFound(id))?;

        if let Some(name) = new_name.and_then(|n| validate_item_name(n).ok()) {
            item.name = name;
        }

        let mut price_rejected = false;
        if let Some(price) = new_price {
            match validate_price(price) {
                Ok(price) => item.price = price,
                Err(_) => price_rejected = true,
            }
        }

        debug!(id, price_rejected, "Updated item");
        Ok(UpdateOutcome {
            item: item.clone(),
            price_rejected,
        })
    }

    /// Removes the item with this ID. Returns whether anything was removed.
    pub fn remove(&mut self, id: u32) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != initial_len
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str, price: f64) -> Item {
        Item {
            id,
            name: name.to_string(),
            price,
        }
    }

    fn bakery() -> ItemRepository {
        ItemRepository::new(vec![
            item(1, "Bun", 1.5),
            item(2, "Cake", 10.0),
            item(5, "Croissant", 2.5),
        ])
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(&[]), Ok(1));
        assert_eq!(bakery().next_id(), Ok(6));
        assert_eq!(next_id(&[item(9, "A", 1.0), item(3, "B", 1.0)]), Ok(10));
    }

    #[test]
    fn test_add_fails_when_max_id_is_taken() {
        let mut repo = ItemRepository::new(vec![item(u32::MAX, "Bun", 1.0)]);

        assert_eq!(
            repo.add("Cake", 10.0),
            Err(CoreError::IdSpaceExhausted { max: u32::MAX })
        );
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_add_assigns_increasing_ids() {
        let mut repo = ItemRepository::default();
        let a = repo.add("Bun", 1.5).unwrap();
        let b = repo.add("Cake", 10.0).unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_ids_never_repeat_after_removal() {
        let mut repo = ItemRepository::default();
        let mut seen = Vec::new();
        for (i, name) in ["A", "B", "C", "D", "E", "F"].iter().enumerate() {
            let added = repo.add(name, 1.0).unwrap();
            if let Some(last) = seen.last() {
                assert!(added.id > *last);
            }
            seen.push(added.id);
            if i % 2 == 1 {
                // Remove something below the max; the max survives
                assert!(repo.remove(seen[i - 1]));
            }
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_add_trims_name() {
        let mut repo = ItemRepository::default();
        let added = repo.add("  Baguette  ", 3.0).unwrap();
        assert_eq!(added.name, "Baguette");
    }

    #[test]
    fn test_add_duplicate_name_ignores_case() {
        let mut repo = ItemRepository::default();
        repo.add("Croissant", 2.5).unwrap();
        let err = repo.add("croissant", 3.0).unwrap_err();
        assert_eq!(
            err,
            CoreError::Validation(ValidationError::DuplicateName {
                name: "croissant".to_string()
            })
        );
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_add_rejects_empty_name_and_negative_price() {
        let mut repo = ItemRepository::default();
        assert_eq!(
            repo.add("", 1.0),
            Err(CoreError::Validation(ValidationError::EmptyName))
        );
        assert!(matches!(
            repo.add("Bread", -1.0),
            Err(CoreError::Validation(ValidationError::InvalidPrice { .. }))
        ));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_add_checks_name_before_price() {
        let mut repo = bakery();
        assert!(matches!(
            repo.add("BUN", -1.0),
            Err(CoreError::Validation(ValidationError::DuplicateName { .. }))
        ));
    }

    #[test]
    fn test_find_by_id() {
        let repo = bakery();
        assert_eq!(repo.find_by_id(2).unwrap().name, "Cake");
        assert_eq!(repo.find_by_id(3), Err(CoreError::ItemNotFound(3)));
    }

    #[test]
    fn test_find_by_name_or_id() {
        let repo = bakery();
        let by_id = repo.find_by_name_or_id("5");
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].name, "Croissant");

        let by_name = repo.find_by_name_or_id(" cAKe ");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, 2);

        assert!(repo.find_by_name_or_id("Muffin").is_empty());
        assert!(repo.find_by_name_or_id("-1").is_empty());
    }

    #[test]
    fn test_find_tolerates_duplicates_in_store() {
        // A hand-edited store can break the uniqueness invariants
        let repo = ItemRepository::new(vec![
            item(1, "Bun", 1.0),
            item(1, "bun", 1.2),
            item(2, "Cake", 10.0),
        ]);
        assert_eq!(repo.find_by_name_or_id("BUN").len(), 2);
        assert_eq!(repo.find_by_name_or_id("1").len(), 2);
    }

    #[test]
    fn test_update_name_and_price() {
        let mut repo = bakery();
        let outcome = repo.update(1, Some(" Sweet Bun "), Some(1.75)).unwrap();
        assert_eq!(outcome.item, item(1, "Sweet Bun", 1.75));
        assert!(!outcome.price_rejected);
        assert_eq!(repo.find_by_id(1).unwrap(), &item(1, "Sweet Bun", 1.75));
    }

    #[test]
    fn test_update_negative_price_keeps_old_price() {
        let mut repo = bakery();
        let outcome = repo.update(2, None, Some(-5.0)).unwrap();
        assert_eq!(outcome.item.price, 10.0);
        assert!(outcome.price_rejected);

        let outcome = repo.update(2, Some("Gateau"), Some(-5.0)).unwrap();
        assert_eq!(outcome.item, item(2, "Gateau", 10.0));
    }

    #[test]
    fn test_update_blank_name_keeps_old_name() {
        let mut repo = bakery();
        let outcome = repo.update(5, Some("   "), None).unwrap();
        assert_eq!(outcome.item.name, "Croissant");
    }

    #[test]
    fn test_update_does_not_check_name_uniqueness() {
        let mut repo = bakery();
        let outcome = repo.update(2, Some("bun"), None).unwrap();
        assert_eq!(outcome.item.name, "bun");
        assert_eq!(repo.find_by_name_or_id("Bun").len(), 2);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut repo = bakery();
        let before = repo.clone();
        assert_eq!(
            repo.update(42, Some("X"), Some(1.0)),
            Err(CoreError::ItemNotFound(42))
        );
        assert_eq!(repo, before);
    }

    #[test]
    fn test_remove() {
        let mut repo = bakery();
        assert!(repo.remove(2));
        assert_eq!(repo.len(), 2);
        assert!(repo.find_by_id(2).is_err());
        // ID 2 is not handed out again while 5 is the max
        assert_eq!(repo.add("Tart", 4.0).unwrap().id, 6);
    }

    #[test]
    fn test_remove_missing_leaves_list_unchanged() {
        let mut repo = bakery();
        let before = repo.clone();
        assert!(!repo.remove(99));
        assert_eq!(repo, before);
    }
}
