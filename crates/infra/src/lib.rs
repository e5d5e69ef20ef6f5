//! Infrastructure layer: persistence adapters and the inventory store service.

pub mod repository;
pub mod store;

pub use repository::{InMemoryRepository, InventoryRepository, JsonFileRepository, PersistenceError};
pub use store::{InventoryStore, StoreError};
