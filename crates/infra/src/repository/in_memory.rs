use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use stockroom_inventory::Item;

use super::r#trait::{InventoryRepository, PersistenceError};

/// In-memory repository.
///
/// Intended for tests/dev. Keeps the last saved sequence and counts saves so
/// callers can assert on the save-after-write policy.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    items: Mutex<Vec<Item>>,
    saves: AtomicUsize,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-seeded as if `items` had been saved by an earlier run.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
            saves: AtomicUsize::new(0),
        }
    }

    /// Copy of the last saved sequence.
    pub fn snapshot(&self) -> Vec<Item> {
        match self.items.lock() {
            Ok(items) => items.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl InventoryRepository for InMemoryRepository {
    fn load(&self) -> Result<Vec<Item>, PersistenceError> {
        Ok(self.snapshot())
    }

    fn save(&self, items: &[Item]) -> Result<(), PersistenceError> {
        let mut guard = match self.items.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = items.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
