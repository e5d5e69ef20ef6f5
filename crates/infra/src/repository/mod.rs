//! Persistence boundary for the inventory.
//!
//! The store only ever reads or writes the whole item sequence at once, so the
//! port is two calls: load everything, save everything.

pub mod file;
pub mod in_memory;
pub mod schema;
pub mod r#trait;

pub use file::JsonFileRepository;
pub use in_memory::InMemoryRepository;
pub use r#trait::{InventoryRepository, PersistenceError};
