//! JSON file adapter.
//!
//! Saves go through a temporary file in the target's directory which is then
//! renamed over the target, so the file on disk is always either the previous
//! complete document or the new complete document.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use stockroom_inventory::Item;
use tempfile::NamedTempFile;

use super::r#trait::{InventoryRepository, PersistenceError};
use super::schema;

/// Inventory persisted as one JSON document at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn write_atomic(&self, contents: &[u8]) -> Result<(), PersistenceError> {
        let dir = self.parent_dir();
        std::fs::create_dir_all(dir).map_err(|err| PersistenceError::io(dir, err))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|err| PersistenceError::io(dir, err))?;
        tmp.write_all(contents)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|err| PersistenceError::io(tmp.path(), err))?;

        // On failure the temp file is dropped (and deleted) with the error.
        tmp.persist(&self.path)
            .map_err(|err| PersistenceError::io(&self.path, err.error))?;

        Ok(())
    }
}

impl InventoryRepository for JsonFileRepository {
    fn load(&self) -> Result<Vec<Item>, PersistenceError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no inventory file yet");
                return Ok(Vec::new());
            }
            Err(err) => return Err(PersistenceError::io(&self.path, err)),
        };

        schema::decode(&bytes)
    }

    fn save(&self, items: &[Item]) -> Result<(), PersistenceError> {
        let contents = schema::encode(items)?;
        self.write_atomic(&contents)?;
        tracing::debug!(path = %self.path.display(), items = items.len(), "inventory file written");
        Ok(())
    }
}
