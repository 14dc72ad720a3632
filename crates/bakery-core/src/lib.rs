//! # bakery-core: Pure Business Logic for Bakery POS
//!
//! This crate holds the item rules and billing math as pure functions over
//! an in-memory snapshot. It never touches the filesystem.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bakery POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Session Controller (bakery-cli)                  │   │
//! │  │   Add ─► Display ─► Search ─► Update ─► Delete ─► Billing       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ bakery-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ repository │  │  billing  │  │ validation│  │   │
//! │  │   │   Item    │  │  next_id   │  │  Session  │  │   rules   │  │   │
//! │  │   │   Bill    │  │  add/find  │  │  Bill     │  │  parsing  │  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                bakery-store (Record Store)                      │   │
//! │  │                  load() / save() of bakery.json                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Pick, Bill)
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation and input classification
//! - [`repository`] - Item Repository over one loaded snapshot
//! - [`billing`] - Billing Calculator
//!
//! ## Example Usage
//!
//! ```rust
//! use bakery_core::repository::ItemRepository;
//! use bakery_core::billing::run_billing;
//! use bakery_core::Pick;
//!
//! let mut repo = ItemRepository::new(Vec::new());
//! repo.add("Bun", 1.50).unwrap();
//! repo.add("Cake", 10.00).unwrap();
//!
//! let bill = run_billing(repo.items(), &[Pick::new(1, 3), Pick::new(2, 1)]);
//! assert_eq!(bill.total, 14.50);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod error;
pub mod repository;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use billing::{apply_pick, run_billing, BillingSession, SessionState};
pub use error::{CoreError, CoreResult, ValidationError};
pub use repository::{ItemRepository, UpdateOutcome};
pub use types::*;

/// ID given to the first item of an empty store.
pub const FIRST_ITEM_ID: u32 = 1;
