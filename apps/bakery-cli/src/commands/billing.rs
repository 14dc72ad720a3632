//! # Billing Commands
//!
//! Billing never writes to the store; it only reads a snapshot.

use bakery_core::{Bill, BillingSession, Pick};
use tracing::info;

use super::Inventory;
use crate::error::{AppError, AppResult};

impl Inventory {
    /// Bills a whole list of picks at once. Rejected picks are skipped.
    pub fn run_billing(&self, picks: &[Pick]) -> AppResult<Bill> {
        let repo = self.load_repository()?;
        if repo.is_empty() {
            return Err(AppError::empty_store());
        }

        let bill = bakery_core::run_billing(repo.items(), picks);
        info!(lines = bill.lines.len(), total = bill.total, "Bill closed");
        Ok(bill)
    }

    /// Opens an interactive billing session over the current items.
    pub fn open_billing(&self) -> AppResult<BillingSession> {
        let repo = self.load_repository()?;
        if repo.is_empty() {
            return Err(AppError::empty_store());
        }

        Ok(BillingSession::open(repo.into_items()))
    }
}
