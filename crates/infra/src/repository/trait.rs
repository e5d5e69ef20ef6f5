use std::path::PathBuf;
use std::sync::Arc;

use stockroom_inventory::Item;
use thiserror::Error;

/// Persistence operation error.
///
/// These are **infrastructure errors** (file system, encoding) as opposed to
/// domain errors (missing records, bad input).
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode inventory: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode inventory: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("unsupported inventory file version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Whole-collection storage for inventory items.
///
/// ## Load Semantics
///
/// `load()`:
/// - Returns the persisted items in their stored order
/// - Returns an empty vector if nothing was ever saved
/// - Returns an error for unreadable or undecodable state; whether that is
///   fatal is the caller's decision
///
/// ## Save Semantics
///
/// `save()` replaces the previously stored sequence entirely. A reader must
/// never observe a half-written sequence.
pub trait InventoryRepository {
    fn load(&self) -> Result<Vec<Item>, PersistenceError>;

    fn save(&self, items: &[Item]) -> Result<(), PersistenceError>;
}

impl<R> InventoryRepository for Arc<R>
where
    R: InventoryRepository + ?Sized,
{
    fn load(&self) -> Result<Vec<Item>, PersistenceError> {
        (**self).load()
    }

    fn save(&self, items: &[Item]) -> Result<(), PersistenceError> {
        (**self).save(items)
    }
}
