//! # Session Controller
//!
//! The text menu. Generic over its input and output so tests can script a
//! whole session without a terminal.
//!
//! ## Menu
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  --- Bakery Management System ---                                       │
//! │  1. Add Item      ──► Inventory::add_item                               │
//! │  2. Display Items ──► Inventory::list_items                             │
//! │  3. Search Item   ──► Inventory::search_items                           │
//! │  4. Update Item   ──► Inventory::update_item                            │
//! │  5. Delete Item   ──► Inventory::delete_item                            │
//! │  6. Billing       ──► Inventory::open_billing + BillingSession::pick    │
//! │  7. Exit                                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure is printed and the menu comes back. End of input ends the
//! session like choice 7.

use std::io::{self, BufRead, Write};

use bakery_core::validation::{parse_item_id, parse_price, parse_quantity};
use bakery_core::Item;
use tracing::debug;

use crate::commands::Inventory;
use crate::error::{AppError, AppResult};

/// Runs the menu until Exit or end of input.
pub fn run_session<R: BufRead, W: Write>(
    inventory: &Inventory,
    input: R,
    output: W,
) -> io::Result<()> {
    Session {
        inventory,
        input,
        output,
    }
    .run()
}

/// Reads an ID typed at a prompt. Integers no item can carry are reported
/// as not found.
fn item_id(raw: &str) -> AppResult<u32> {
    parse_item_id(raw)?.ok_or_else(AppError::item_not_found)
}

/// What the menu loop does after a choice.
enum Flow {
    Continue,
    Exit,
}

struct Session<'a, R, W> {
    inventory: &'a Inventory,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter choice: ")? else {
                break;
            };

            let flow = match choice.parse::<u32>() {
                Ok(1) => self.add_item()?,
                Ok(2) => self.display_items()?,
                Ok(3) => self.search_item()?,
                Ok(4) => self.update_item()?,
                Ok(5) => self.delete_item()?,
                Ok(6) => self.billing()?,
                Ok(7) => Flow::Exit,
                Ok(_) => {
                    self.say("Invalid choice!")?;
                    Flow::Continue
                }
                Err(_) => {
                    self.say("Please enter a valid number for choice.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        debug!("Session ended");
        self.output.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Bakery Management System ---")?;
        writeln!(self.output, "1. Add Item")?;
        writeln!(self.output, "2. Display Items")?;
        writeln!(self.output, "3. Search Item")?;
        writeln!(self.output, "4. Update Item")?;
        writeln!(self.output, "5. Delete Item")?;
        writeln!(self.output, "6. Billing")?;
        writeln!(self.output, "7. Exit")
    }

    /// Prints `text` and reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    fn report(&mut self, err: &AppError) -> io::Result<()> {
        debug!(code = ?err.code, "Operation failed");
        self.say(&err.message)
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    fn add_item(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("Enter item name: ")? else {
            return Ok(Flow::Exit);
        };
        if name.is_empty() {
            self.say("Item name cannot be empty!")?;
            return Ok(Flow::Continue);
        }

        match self.inventory.is_name_taken(&name) {
            Ok(true) => {
                self.say("Item already exists!")?;
                return Ok(Flow::Continue);
            }
            Ok(false) => {}
            Err(e) => {
                self.report(&e)?;
                return Ok(Flow::Continue);
            }
        }

        let Some(raw_price) = self.prompt("Enter item price: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(price) = parse_price(&raw_price) else {
            self.say("Invalid price! Please enter a valid number.")?;
            return Ok(Flow::Continue);
        };

        match self.inventory.add_item(&name, price) {
            Ok(item) => self.say(&format!("Item added successfully! ID: {}", item.id))?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn display_items(&mut self) -> io::Result<Flow> {
        match self.inventory.list_items() {
            Ok(items) => self.print_items(&items)?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn print_items(&mut self, items: &[Item]) -> io::Result<()> {
        if items.is_empty() {
            return self.say("No items found!");
        }

        writeln!(self.output)?;
        writeln!(self.output, "--- Bakery Items ---")?;
        writeln!(self.output, "ID\tName\tPrice")?;
        for item in items {
            writeln!(self.output, "{}", item)?;
        }
        Ok(())
    }

    fn search_item(&mut self) -> io::Result<Flow> {
        let Some(token) = self.prompt("Enter item name or ID to search: ")? else {
            return Ok(Flow::Exit);
        };

        match self.inventory.search_items(&token) {
            Ok(found) if found.is_empty() => self.say("Item not found!")?,
            Ok(found) => {
                for item in found {
                    self.say(&format!(
                        "Item Found: {} | {} | {:?}",
                        item.id, item.name, item.price
                    ))?;
                }
            }
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn update_item(&mut self) -> io::Result<Flow> {
        let Some(raw_id) = self.prompt("Enter item ID to update: ")? else {
            return Ok(Flow::Exit);
        };
        let id = match item_id(&raw_id) {
            Ok(id) => id,
            Err(e) => {
                self.report(&e)?;
                return Ok(Flow::Continue);
            }
        };

        if let Err(e) = self.inventory.get_item(id) {
            self.report(&e)?;
            return Ok(Flow::Continue);
        }

        let Some(new_name) = self.prompt("Enter new name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(raw_price) = self.prompt("Enter new price: ")? else {
            return Ok(Flow::Exit);
        };

        let new_price = match parse_price(&raw_price) {
            Ok(price) => Some(price),
            Err(_) => {
                self.say("Invalid price, keeping old price.")?;
                None
            }
        };

        match self.inventory.update_item(id, Some(&new_name), new_price) {
            Ok(outcome) => {
                if outcome.price_rejected {
                    self.say("Price cannot be negative, keeping old price.")?;
                }
                self.say("Item updated successfully!")?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete_item(&mut self) -> io::Result<Flow> {
        let Some(raw_id) = self.prompt("Enter item ID to delete: ")? else {
            return Ok(Flow::Exit);
        };

        let result = item_id(&raw_id).and_then(|id| self.inventory.delete_item(id));

        match result {
            Ok(()) => self.say("Item deleted successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn billing(&mut self) -> io::Result<Flow> {
        let mut session = match self.inventory.open_billing() {
            Ok(session) => session,
            Err(e) => {
                self.report(&e)?;
                return Ok(Flow::Continue);
            }
        };

        let items = session.items().to_vec();
        self.print_items(&items)?;

        let mut flow = Flow::Continue;
        loop {
            let Some(raw_id) = self.prompt("Enter item ID to buy (or 0 to finish): ")? else {
                flow = Flow::Exit;
                break;
            };
            let id = match item_id(&raw_id) {
                Ok(0) => break,
                Ok(id) if items.iter().any(|item| item.id == id) => id,
                Ok(_) => {
                    self.report(&AppError::item_not_found())?;
                    continue;
                }
                Err(e) => {
                    self.report(&e)?;
                    continue;
                }
            };

            let Some(raw_qty) = self.prompt("Enter quantity: ")? else {
                flow = Flow::Exit;
                break;
            };
            let Ok(quantity) = parse_quantity(&raw_qty) else {
                self.say("Invalid quantity! Skipping item.")?;
                continue;
            };

            match session.pick(id, quantity) {
                Ok(line) => {
                    let message = format!("Added {} x {}", line.quantity, line.name);
                    self.say(&message)?;
                }
                Err(e) => self.report(&AppError::from(e))?,
            }
        }

        let bill = session.close();
        self.say(&format!("Total Bill: {:?}", bill.total))?;
        Ok(flow)
    }
}
