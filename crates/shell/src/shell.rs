//! Interactive session loop.
//!
//! Reads menu selections and prompted values line by line from any `BufRead`
//! and writes messages and tables to any `Write`, so a session can be driven
//! by a terminal or by a script. End of input at any prompt behaves like the
//! Exit action.

use std::io::{BufRead, Write};

use anyhow::Context;
use stockroom_infra::{InventoryRepository, InventoryStore, StoreError};
use stockroom_inventory::DEFAULT_LOW_STOCK_THRESHOLD;
use tracing::{debug, info};

use crate::action::Action;
use crate::input::{parse_price, parse_quantity};
use crate::render;

pub const WELCOME: &str = "WELCOME TO INVENTORY MANAGEMENT SYSTEM";
pub const EMPTY_INVENTORY: &str = "Oops! Inventory is empty!";
pub const INVALID_INPUT: &str = "Invalid input! Please enter numeric values.";
pub const NOT_FOUND: &str = "Sorry: Item not found!";
pub const NO_LOW_STOCK: &str = "No low stock items.";
pub const ITEM_ADDED: &str = "Item added successfully!";
pub const ITEM_UPDATED: &str = "Item updated successfully!";
pub const ITEM_REMOVED: &str = "Item removed successfully!";
pub const EXIT_SAVED: &str = "Exiting The System... Data saved!";
pub const EXIT_UNSAVED: &str = "Exiting The System...";
pub const UNKNOWN_SELECTION: &str = "Unknown option, pick a number from the menu.";

/// Whether the session continues after an action.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A terminal session over an inventory store.
pub struct Shell<R, I, O> {
    store: InventoryStore<R>,
    input: I,
    output: O,
    low_stock_threshold: i64,
}

impl<R, I, O> Shell<R, I, O>
where
    R: InventoryRepository,
    I: BufRead,
    O: Write,
{
    pub fn new(store: InventoryStore<R>, input: I, output: O) -> Self {
        Self {
            store,
            input,
            output,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }

    pub fn with_low_stock_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    pub fn store(&self) -> &InventoryStore<R> {
        &self.store
    }

    pub fn into_parts(self) -> (InventoryStore<R>, O) {
        (self.store, self.output)
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.say(WELCOME)?;

        loop {
            self.write_menu()?;
            let Some(selection) = self.prompt("Select an option:")? else {
                self.exit()?;
                return Ok(());
            };

            let Some(action) = Action::parse(&selection) else {
                self.say(UNKNOWN_SELECTION)?;
                continue;
            };

            if self.dispatch(action)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Perform one action.
    pub fn dispatch(&mut self, action: Action) -> anyhow::Result<Flow> {
        debug!(%action, "dispatching action");

        match action {
            Action::ViewInventory => self.view_inventory(),
            Action::AddItem => self.add_item(),
            Action::UpdateItem => self.update_item(),
            Action::RemoveItem => self.remove_item(),
            Action::SearchItem => self.search_item(),
            Action::ViewReports => self.view_reports(),
            Action::Exit => self.exit(),
        }
    }

    fn view_inventory(&mut self) -> anyhow::Result<Flow> {
        if self.store.is_empty() {
            self.say(EMPTY_INVENTORY)?;
        } else {
            render::write_table(&mut self.output, self.store.list())
                .context("failed to write inventory table")?;
        }
        Ok(Flow::Continue)
    }

    fn add_item(&mut self) -> anyhow::Result<Flow> {
        let Some(id) = self.prompt("Enter Item ID:")? else {
            return self.exit();
        };
        let Some(name) = self.prompt("Enter Item Name:")? else {
            return self.exit();
        };
        let Some(quantity) = self.prompt_number("Enter Quantity (KG):", parse_quantity)? else {
            return self.abort_or_exit();
        };
        let Some(price) = self.prompt_number("Enter Price (MWK):", parse_price)? else {
            return self.abort_or_exit();
        };

        let outcome = self.store.add(id, name, quantity, price);
        self.report_mutation(outcome, ITEM_ADDED)
    }

    fn update_item(&mut self) -> anyhow::Result<Flow> {
        let Some(id) = self.prompt("Enter Item ID to update:")? else {
            return self.exit();
        };
        if self.store.get(&id).is_none() {
            self.say(NOT_FOUND)?;
            return Ok(Flow::Continue);
        }

        let Some(quantity) = self.prompt_number("Enter new quantity:", parse_quantity)? else {
            return self.abort_or_exit();
        };
        let Some(price) = self.prompt_number("Enter new price:", parse_price)? else {
            return self.abort_or_exit();
        };

        let outcome = self.store.update(&id, quantity, price);
        self.report_mutation(outcome, ITEM_UPDATED)
    }

    fn remove_item(&mut self) -> anyhow::Result<Flow> {
        let Some(id) = self.prompt("Enter Item ID to remove:")? else {
            return self.exit();
        };

        let outcome = self.store.remove(&id);
        self.report_mutation(outcome, ITEM_REMOVED)
    }

    fn search_item(&mut self) -> anyhow::Result<Flow> {
        let Some(query) = self.prompt("Enter Item Name or ID:")? else {
            return self.exit();
        };

        match self.store.find(&query).ok().cloned() {
            Some(item) => render::write_details(&mut self.output, &item)
                .context("failed to write item details")?,
            None => self.say(NOT_FOUND)?,
        }
        Ok(Flow::Continue)
    }

    fn view_reports(&mut self) -> anyhow::Result<Flow> {
        let low = self.store.low_stock(self.low_stock_threshold);
        if low.is_empty() {
            self.say(NO_LOW_STOCK)?;
        } else {
            render::write_table(&mut self.output, low)
                .context("failed to write low stock report")?;
        }
        Ok(Flow::Continue)
    }

    fn exit(&mut self) -> anyhow::Result<Flow> {
        match self.store.persist() {
            Ok(()) => self.say(EXIT_SAVED)?,
            Err(err) => {
                self.say_save_error(&err)?;
                self.say(EXIT_UNSAVED)?;
            }
        }
        info!("session ended");
        Ok(Flow::Exit)
    }

    /// Shared tail of add/update/remove.
    ///
    /// A failed save is reported, but the change is already in memory, so
    /// the success message and refreshed table still follow.
    fn report_mutation<T>(
        &mut self,
        outcome: Result<T, StoreError>,
        success: &str,
    ) -> anyhow::Result<Flow> {
        match outcome {
            Ok(_) => {}
            Err(StoreError::NotFound(_)) => {
                self.say(NOT_FOUND)?;
                return Ok(Flow::Continue);
            }
            Err(err) => self.say_save_error(&err)?,
        }

        self.say(success)?;
        self.view_inventory()
    }

    fn say_save_error(&mut self, err: &StoreError) -> anyhow::Result<()> {
        let cause = match err {
            StoreError::Persistence(source) => source.to_string(),
            other => other.to_string(),
        };
        self.say(&format!("Error saving inventory: {cause}"))
    }

    /// Numeric prompt. `Ok(None)` means the value was rejected (message
    /// already shown) or input ended; [`Self::abort_or_exit`] tells them apart.
    fn prompt_number<T, E>(
        &mut self,
        message: &str,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> anyhow::Result<Option<T>>
    where
        E: std::fmt::Display,
    {
        let Some(raw) = self.prompt(message)? else {
            return Ok(None);
        };

        match parse(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                debug!(error = %err, "rejected numeric input");
                self.say(INVALID_INPUT)?;
                Ok(None)
            }
        }
    }

    fn abort_or_exit(&mut self) -> anyhow::Result<Flow> {
        if self.at_eof()? {
            self.exit()
        } else {
            Ok(Flow::Continue)
        }
    }

    fn at_eof(&mut self) -> anyhow::Result<bool> {
        let buffered = self.input.fill_buf().context("failed to read input")?;
        Ok(buffered.is_empty())
    }

    /// Show `message` and read one line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{message} ").context("failed to write prompt")?;
        self.output.flush().context("failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            writeln!(self.output).context("failed to write output")?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    fn write_menu(&mut self) -> anyhow::Result<()> {
        writeln!(self.output).context("failed to write menu")?;
        for action in Action::ALL {
            writeln!(self.output, "{}) {}", action.number(), action.label())
                .context("failed to write menu")?;
        }
        Ok(())
    }

    fn say(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{message}").context("failed to write output")
    }
}
