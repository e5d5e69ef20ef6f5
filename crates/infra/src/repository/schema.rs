//! On-disk schema of the inventory file.
//!
//! The file is a single JSON document:
//!
//! ```json
//! {
//!   "version": 1,
//!   "items": [
//!     { "id": "A1", "name": "Rice", "quantity": 10, "price": 2.5 }
//!   ]
//! }
//! ```
//!
//! Wire records are separate from [`Item`] so that a change to the domain
//! type cannot silently change the file format.

use serde::{Deserialize, Serialize};
use stockroom_inventory::Item;

use super::r#trait::PersistenceError;

/// Current schema version written by [`encode`].
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemRecord {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct InventoryDocument {
    version: u32,
    items: Vec<ItemRecord>,
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            quantity: item.quantity,
            price: item.price,
        }
    }
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.id, record.name, record.quantity, record.price)
    }
}

pub fn encode(items: &[Item]) -> Result<Vec<u8>, PersistenceError> {
    let document = InventoryDocument {
        version: SCHEMA_VERSION,
        items: items.iter().map(ItemRecord::from).collect(),
    };
    serde_json::to_vec_pretty(&document).map_err(PersistenceError::Encode)
}

pub fn decode(bytes: &[u8]) -> Result<Vec<Item>, PersistenceError> {
    let document: InventoryDocument =
        serde_json::from_slice(bytes).map_err(PersistenceError::Decode)?;

    if document.version != SCHEMA_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: document.version,
            expected: SCHEMA_VERSION,
        });
    }

    Ok(document.items.into_iter().map(Item::from).collect())
}
