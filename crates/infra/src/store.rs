//! Inventory store (application-level orchestration).
//!
//! The store is the sole owner of the in-memory [`Inventory`] and composes it
//! with an [`InventoryRepository`]. It is constructed once at startup and
//! handed to the front end, which drives every read and write through it.
//!
//! ## Mutation Flow
//!
//! ```text
//! add / update / remove
//!   ↓
//! 1. Apply the change to the in-memory inventory (pure domain logic)
//!   ↓
//! 2. NotFound? → return it, nothing changed, nothing saved
//!   ↓
//! 3. Save the whole sequence through the repository
//!   ↓
//! 4. Save failed? → return Persistence, the in-memory change is kept
//! ```
//!
//! ## Policies
//!
//! - **Save after write**: every successful mutation is followed by a save, so
//!   memory and storage agree between operations unless a save failed.
//! - **Memory is authoritative**: a failed save never rolls back memory. The
//!   stored copy lags until the next successful save.
//! - **Forgiving load**: missing, unreadable or undecodable state at startup
//!   yields an empty inventory and a warning, never a startup failure.
//!
//! There is no guard against another process writing the same file.

use stockroom_core::DomainError;
use stockroom_inventory::{Inventory, Item};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::repository::{InventoryRepository, PersistenceError};

#[derive(Debug, Error)]
pub enum StoreError {
    /// No item matched the given id (or, for `find`, id or name).
    #[error("item not found: {0}")]
    NotFound(String),

    /// Saving failed. When returned from a mutation, the mutation itself was
    /// applied in memory.
    #[error("failed to save inventory: {0}")]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Domain(DomainError),
}

impl StoreError {
    fn from_domain(err: DomainError, key: &str) -> Self {
        match err {
            DomainError::NotFound => Self::NotFound(key.to_string()),
            other => Self::Domain(other),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Owner of the inventory and its persistence.
#[derive(Debug)]
pub struct InventoryStore<R> {
    inventory: Inventory,
    repository: R,
}

impl<R> InventoryStore<R>
where
    R: InventoryRepository,
{
    /// Load the persisted inventory, or start empty if it cannot be loaded.
    pub fn open(repository: R) -> Self {
        let inventory = match repository.load() {
            Ok(items) => {
                info!(items = items.len(), "inventory loaded");
                Inventory::from_items(items)
            }
            Err(err) => {
                warn!(error = %err, "could not load inventory; starting empty");
                Inventory::new()
            }
        };

        Self {
            inventory,
            repository,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Full sequence in insertion order.
    pub fn list(&self) -> &[Item] {
        self.inventory.items()
    }

    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }

    /// Append a new item and save. Duplicate ids are accepted.
    pub fn add(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        quantity: i64,
        price: f64,
    ) -> Result<(), StoreError> {
        let item = Item::new(id, name, quantity, price);
        debug!(id = %item.id, name = %item.name, quantity, price, "adding item");

        self.inventory.push(item);
        self.persist()
    }

    /// Overwrite quantity and price of the first item with `id`, then save.
    pub fn update(&mut self, id: &str, quantity: i64, price: f64) -> Result<(), StoreError> {
        self.inventory
            .update(id, quantity, price)
            .map_err(|err| StoreError::from_domain(err, id))?;
        debug!(id, quantity, price, "item updated");

        self.persist()
    }

    /// Remove every item with `id`, then save. Returns how many were removed.
    pub fn remove(&mut self, id: &str) -> Result<usize, StoreError> {
        let removed = self
            .inventory
            .remove(id)
            .map_err(|err| StoreError::from_domain(err, id))?;
        debug!(id, removed, "items removed");

        self.persist()?;
        Ok(removed)
    }

    /// First item whose id equals `query`, else first whose name matches it
    /// case-insensitively.
    pub fn find(&self, query: &str) -> Result<&Item, StoreError> {
        let found = self.inventory.find(query);
        debug!(query, found = found.is_some(), "item lookup");

        found.ok_or_else(|| StoreError::NotFound(query.to_string()))
    }

    /// First item whose id equals `id` exactly.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.inventory.get(id)
    }

    /// Items with quantity strictly below `threshold`, in insertion order.
    pub fn low_stock(&self, threshold: i64) -> Vec<&Item> {
        self.inventory.low_stock(threshold).collect()
    }

    /// Save the whole inventory, replacing whatever was stored.
    pub fn persist(&self) -> Result<(), StoreError> {
        match self.repository.save(self.inventory.items()) {
            Ok(()) => {
                info!(items = self.inventory.len(), "inventory saved");
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "failed to save inventory");
                Err(err.into())
            }
        }
    }
}
