//! # Billing Calculator
//!
//! Sums picks against a fixed item snapshot.
//!
//! ## Session State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   BillingSession::open(items)                                          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   ┌─────────┐  pick(id, qty) ─┬─ Ok(delta)   → total += delta           │
//! │   │  Open   │◄────────────────┤                                        │
//! │   └────┬────┘                 └─ Err(...)    → total unchanged,         │
//! │        │                                       session stays open       │
//! │        │ close()                                                        │
//! │        ▼                                                                │
//! │   ┌─────────┐                                                           │
//! │   │ Closed  │ ──► Bill { lines, total, closed_at }                      │
//! │   └─────────┘                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The snapshot is cloned when the session opens, so price changes made
//! elsewhere during billing do not affect the running total.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::types::{Bill, BillLine, Item, Pick};
use crate::validation::validate_quantity;

/// Computes the amount one pick adds to the running total.
///
/// ## Errors
/// - `ItemNotFound` when no item has this ID
/// - `NegativeQuantity` when `quantity < 0`
///
/// ## Example
/// ```rust
/// use bakery_core::{apply_pick, Item};
///
/// let items = vec![Item { id: 1, name: "Bun".into(), price: 1.5 }];
/// assert_eq!(apply_pick(&items, 1, 3).unwrap(), 4.5);
/// assert!(apply_pick(&items, 1, -1).is_err());
/// ```
pub fn apply_pick(items: &[Item], id: u32, quantity: i64) -> CoreResult<f64> {
    let item = find_item(items, id)?;
    let quantity = validate_quantity(quantity)?;
    Ok(item.price * quantity as f64)
}

fn find_item(items: &[Item], id: u32) -> CoreResult<&Item> {
    items
        .iter()
        .find(|item| item.id == id)
        .ok_or(CoreError::ItemNotFound(id))
}

/// Lifecycle of a billing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Open,
    Closed,
}

/// An interactive billing session over a fixed snapshot.
#[derive(Debug, Clone)]
pub struct BillingSession {
    items: Vec<Item>,
    lines: Vec<BillLine>,
    total: f64,
    state: SessionState,
    closed_at: Option<DateTime<Utc>>,
}

impl BillingSession {
    /// Opens a session with a zero total.
    pub fn open(items: Vec<Item>) -> Self {
        BillingSession {
            items,
            lines: Vec::new(),
            total: 0.0,
            state: SessionState::Open,
            closed_at: None,
        }
    }

    /// Items available to pick from.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Running total of every successful pick so far.
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn lines(&self) -> &[BillLine] {
        &self.lines
    }

    /// Applies one pick and returns the recorded line.
    ///
    /// A failed pick leaves the total untouched and the session open.
    pub fn pick(&mut self, id: u32, quantity: i64) -> CoreResult<&BillLine> {
        if self.state == SessionState::Closed {
            return Err(CoreError::SessionClosed);
        }

        let delta = apply_pick(&self.items, id, quantity)?;
        let item = find_item(&self.items, id)?;

        let line = BillLine {
            item_id: item.id,
            name: item.name.clone(),
            unit_price: item.price,
            quantity,
            line_total: delta,
        };
        debug!(id, quantity, delta, "Pick applied");

        self.total += delta;
        self.lines.push(line);
        // Just pushed, so the slice is non-empty
        Ok(&self.lines[self.lines.len() - 1])
    }

    /// Closes the session and returns the bill. Later picks fail with
    /// `SessionClosed`; closing again returns the same bill.
    pub fn close(&mut self) -> Bill {
        self.state = SessionState::Closed;
        let closed_at = *self.closed_at.get_or_insert_with(Utc::now);
        Bill {
            lines: self.lines.clone(),
            total: self.total,
            closed_at,
        }
    }
}

/// Runs a whole billing session from a list of picks.
///
/// Failed picks are skipped, matching the interactive session where the
/// cashier is simply prompted again.
pub fn run_billing(items: &[Item], picks: &[Pick]) -> Bill {
    let mut session = BillingSession::open(items.to_vec());

    for pick in picks {
        if let Err(e) = session.pick(pick.item_id, pick.quantity) {
            warn!(item_id = pick.item_id, quantity = pick.quantity, error = %e, "Skipping pick");
        }
    }

    session.close()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item {
                id: 1,
                name: "Bun".to_string(),
                price: 1.50,
            },
            Item {
                id: 2,
                name: "Cake".to_string(),
                price: 10.00,
            },
        ]
    }

    #[test]
    fn test_apply_pick() {
        let items = items();
        assert_eq!(apply_pick(&items, 1, 3), Ok(4.5));
        assert_eq!(apply_pick(&items, 2, 0), Ok(0.0));
        assert_eq!(apply_pick(&items, 99, 1), Err(CoreError::ItemNotFound(99)));
        assert_eq!(
            apply_pick(&items, 1, -1),
            Err(CoreError::NegativeQuantity { quantity: -1 })
        );
    }

    #[test]
    fn test_run_billing_skips_failed_picks() {
        let picks = [
            Pick::new(1, 3),
            Pick::new(2, 1),
            Pick::new(99, 1),
            Pick::new(1, -1),
        ];
        let bill = run_billing(&items(), &picks);
        assert!((bill.total - 14.50).abs() < 1e-9);
        assert_eq!(bill.lines.len(), 2);
        assert_eq!(bill.total_quantity(), 4);
    }

    #[test]
    fn test_empty_session_totals_zero() {
        let bill = run_billing(&items(), &[]);
        assert_eq!(bill.total, 0.0);
        assert!(bill.is_empty());
    }

    #[test]
    fn test_session_failed_pick_keeps_session_open() {
        let mut session = BillingSession::open(items());
        assert!(session.pick(7, 1).is_err());
        assert_eq!(session.state(), SessionState::Open);
        assert_eq!(session.total(), 0.0);

        let line = session.pick(2, 2).unwrap();
        assert_eq!(line.name, "Cake");
        assert_eq!(line.line_total, 20.0);
        assert_eq!(session.total(), 20.0);
    }

    #[test]
    fn test_bill_lines_freeze_snapshot() {
        let mut session = BillingSession::open(items());
        session.pick(1, 2).unwrap();
        let bill = session.close();
        assert_eq!(
            bill.lines,
            vec![BillLine {
                item_id: 1,
                name: "Bun".to_string(),
                unit_price: 1.5,
                quantity: 2,
                line_total: 3.0,
            }]
        );
        assert_eq!(bill.total, 3.0);
    }

    #[test]
    fn test_pick_after_close_fails() {
        let mut session = BillingSession::open(items());
        session.pick(1, 1).unwrap();
        let bill = session.close();
        assert_eq!(session.state(), SessionState::Closed);
        assert_eq!(session.pick(1, 1).unwrap_err(), CoreError::SessionClosed);
        assert_eq!(bill.total, 1.5);
    }

    #[test]
    fn test_close_twice_returns_same_bill() {
        let mut session = BillingSession::open(items());
        session.pick(1, 2).unwrap();

        let first = session.close();
        let second = session.close();
        assert_eq!(first, second);

        let lines_sum: f64 = second.lines.iter().map(|line| line.line_total).sum();
        assert_eq!(second.total, lines_sum);
    }
}
