//! # Item Commands
//!
//! Create, read, update and delete on the item list.

use bakery_core::{CoreError, Item, UpdateOutcome};
use tracing::info;

use super::Inventory;
use crate::error::AppResult;

impl Inventory {
    /// Adds an item and saves. Returns the item with its assigned ID.
    pub fn add_item(&self, name: &str, price: f64) -> AppResult<Item> {
        let mut repo = self.load_repository()?;
        let item = repo.add(name, price)?;
        self.save_repository(repo)?;

        info!(id = item.id, name = %item.name, price = item.price, "Item added");
        Ok(item)
    }

    /// Every item, in store order.
    pub fn list_items(&self) -> AppResult<Vec<Item>> {
        Ok(self.store().load()?)
    }

    /// Items matching an ID or a name (see `ItemRepository::find_by_name_or_id`).
    pub fn search_items(&self, token: &str) -> AppResult<Vec<Item>> {
        let repo = self.load_repository()?;
        Ok(repo.find_by_name_or_id(token).into_iter().cloned().collect())
    }

    /// Gets one item by ID.
    pub fn get_item(&self, id: u32) -> AppResult<Item> {
        let repo = self.load_repository()?;
        Ok(repo.find_by_id(id)?.clone())
    }

    /// Checks whether an item already uses this name, ignoring case.
    ///
    /// Lets the menu reject a duplicate before asking for a price.
    pub fn is_name_taken(&self, name: &str) -> AppResult<bool> {
        let name = name.trim();
        let repo = self.load_repository()?;
        Ok(repo.items().iter().any(|item| item.name_matches(name)))
    }

    /// Updates name and/or price and saves.
    ///
    /// A rejected price keeps the old one and is reported through
    /// `UpdateOutcome::price_rejected`; the name change is still saved.
    pub fn update_item(
        &self,
        id: u32,
        new_name: Option<&str>,
        new_price: Option<f64>,
    ) -> AppResult<UpdateOutcome> {
        let mut repo = self.load_repository()?;
        let outcome = repo.update(id, new_name, new_price)?;
        self.save_repository(repo)?;

        info!(id, price_rejected = outcome.price_rejected, "Item updated");
        Ok(outcome)
    }

    /// Deletes an item and saves. Nothing is written when the ID is unknown.
    pub fn delete_item(&self, id: u32) -> AppResult<()> {
        let mut repo = self.load_repository()?;
        if !repo.remove(id) {
            return Err(CoreError::ItemNotFound(id).into());
        }
        self.save_repository(repo)?;

        info!(id, "Item deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use bakery_store::{RecordStore, StoreConfig};
    use tempfile::TempDir;

    use super::*;
    use crate::error::ErrorCode;

    fn inventory(dir: &TempDir) -> Inventory {
        Inventory::new(RecordStore::new(StoreConfig::new(dir.path().join("bakery.json"))))
    }

    #[test]
    fn test_add_and_list_persist() {
        let dir = TempDir::new().unwrap();
        let inv = inventory(&dir);

        inv.add_item("Bun", 1.5).unwrap();
        inv.add_item("Cake", 10.0).unwrap();

        // A fresh handle sees the same file
        let items = inventory(&dir).list_items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, 2);
    }

    #[test]
    fn test_failed_add_does_not_touch_file() {
        let dir = TempDir::new().unwrap();
        let inv = inventory(&dir);
        inv.add_item("Croissant", 2.5).unwrap();
        let before = fs::read(inv.store().path()).unwrap();

        let err = inv.add_item("croissant", 3.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(fs::read(inv.store().path()).unwrap(), before);
    }

    #[test]
    fn test_search_items() {
        let dir = TempDir::new().unwrap();
        let inv = inventory(&dir);
        inv.add_item("Bun", 1.5).unwrap();
        inv.add_item("Cake", 10.0).unwrap();

        assert_eq!(inv.search_items("CAKE").unwrap()[0].id, 2);
        assert_eq!(inv.search_items("1").unwrap()[0].name, "Bun");
        assert!(inv.search_items("Pie").unwrap().is_empty());
    }

    #[test]
    fn test_is_name_taken() {
        let dir = TempDir::new().unwrap();
        let inv = inventory(&dir);
        inv.add_item("Scone", 1.8).unwrap();
        assert!(inv.is_name_taken(" scone ").unwrap());
        assert!(!inv.is_name_taken("Eclair").unwrap());
    }

    #[test]
    fn test_update_item_keeps_price_on_negative() {
        let dir = TempDir::new().unwrap();
        let inv = inventory(&dir);
        inv.add_item("Bun", 1.5).unwrap();

        let outcome = inv.update_item(1, Some("Hot Cross Bun"), Some(-5.0)).unwrap();
        assert!(outcome.price_rejected);

        let stored = inv.get_item(1).unwrap();
        assert_eq!(stored.name, "Hot Cross Bun");
        assert_eq!(stored.price, 1.5);
    }

    #[test]
    fn test_delete_item() {
        let dir = TempDir::new().unwrap();
        let inv = inventory(&dir);
        inv.add_item("Bun", 1.5).unwrap();
        inv.add_item("Cake", 10.0).unwrap();

        inv.delete_item(1).unwrap();
        assert_eq!(inv.list_items().unwrap().len(), 1);
        assert_eq!(inv.get_item(1).unwrap_err().code, ErrorCode::NotFound);
    }

    #[test]
    fn test_delete_missing_item_leaves_file_identical() {
        let dir = TempDir::new().unwrap();
        let inv = inventory(&dir);
        inv.add_item("Bun", 1.5).unwrap();
        let before = fs::read(inv.store().path()).unwrap();

        let err = inv.delete_item(42).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(fs::read(inv.store().path()).unwrap(), before);
    }

    #[test]
    fn test_corrupt_store_surfaces_storage_error() {
        let dir = TempDir::new().unwrap();
        let inv = inventory(&dir);
        fs::write(inv.store().path(), "garbage").unwrap();

        assert_eq!(inv.list_items().unwrap_err().code, ErrorCode::StorageError);
        assert_eq!(inv.add_item("Bun", 1.0).unwrap_err().code, ErrorCode::StorageError);
        // The corrupt file is not overwritten
        assert_eq!(fs::read_to_string(inv.store().path()).unwrap(), "garbage");
    }
}
