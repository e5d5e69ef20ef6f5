use serde::{Deserialize, Serialize};

/// Items whose quantity is strictly below this value are reported as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// A single inventory record.
///
/// `id` is treated as the lookup key, `name` as a case-insensitive alternate
/// key. Neither uniqueness nor non-negative amounts are enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    /// Unit count (kilograms).
    pub quantity: i64,
    /// Unit price (MWK).
    pub price: f64,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            price,
        }
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.id == id
    }

    /// Case-insensitive name comparison.
    pub fn has_name(&self, name: &str) -> bool {
        self.name == name || self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn is_low_stock(&self, threshold: i64) -> bool {
        self.quantity < threshold
    }
}
