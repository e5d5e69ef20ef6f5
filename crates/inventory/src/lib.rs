//! Inventory domain module.
//!
//! This crate contains the inventory data model and the rules for querying
//! and mutating it, implemented purely as deterministic domain logic (no IO,
//! no terminal, no storage).

pub mod inventory;
pub mod item;

pub use inventory::Inventory;
pub use item::{DEFAULT_LOW_STOCK_THRESHOLD, Item};
