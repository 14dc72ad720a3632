//! # Inventory Commands
//!
//! The operations the menu drives. Each one runs a full cycle against the
//! store file:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Cycle                                        │
//! │                                                                         │
//! │  RecordStore::load() ──► ItemRepository ──► mutate ──┬─ Ok  → save()   │
//! │                                                      └─ Err → no save  │
//! │                                                                         │
//! │  item.rs     add_item, list_items, search_items, update_item,          │
//! │              delete_item                                                │
//! │  billing.rs  run_billing, open_billing                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No repository outlives a single call, so nothing is shared between
//! operations except the file itself.

pub mod billing;
pub mod item;

use bakery_core::ItemRepository;
use bakery_store::RecordStore;

use crate::error::AppResult;

/// Entry point for every inventory operation.
#[derive(Debug, Clone)]
pub struct Inventory {
    store: RecordStore,
}

impl Inventory {
    pub fn new(store: RecordStore) -> Self {
        Inventory { store }
    }

    /// The backing record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Creates the store file if it is missing.
    pub fn bootstrap(&self) -> AppResult<()> {
        self.store.ensure_exists()?;
        Ok(())
    }

    fn load_repository(&self) -> AppResult<ItemRepository> {
        Ok(ItemRepository::new(self.store.load()?))
    }

    fn save_repository(&self, repo: ItemRepository) -> AppResult<()> {
        self.store.save(&repo.into_items())?;
        Ok(())
    }
}
