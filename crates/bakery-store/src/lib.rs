//! # bakery-store: Record Store for Bakery POS
//!
//! Durable representation of the complete item list.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bakery POS Data Flow                             │
//! │                                                                         │
//! │  Inventory command (add_item, delete_item, ...)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   bakery-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐        ┌────────────────────────────────┐  │   │
//! │  │   │  StoreConfig  │───────►│  RecordStore                   │  │   │
//! │  │   │  path         │        │  load()  → Vec<Item>           │  │   │
//! │  │   │  create_if_   │        │  save(&[Item]) full replace    │  │   │
//! │  │   │  missing      │        │  ensure_exists()               │  │   │
//! │  │   └───────────────┘        └────────────────────────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   bakery.json  [ {"id":1,"name":"Bun","price":1.5}, ... ]       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bakery_store::{RecordStore, StoreConfig};
//!
//! let store = RecordStore::new(StoreConfig::new("bakery.json"));
//! let items = store.load()?;
//! store.save(&items)?;
//! # Ok::<(), bakery_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{RecordStore, StoreConfig};
