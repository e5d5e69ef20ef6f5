//! The ordered item collection and its scans.
//!
//! Every lookup is a linear scan in insertion order. Lookups that return a
//! single item stop at the first match; [`Inventory::remove`] is the only
//! exhaustive operation and drops every item carrying the given id.

use stockroom_core::{DomainError, DomainResult};

use crate::item::Item;

/// Ordered sequence of items, insertion order preserved.
///
/// Duplicate ids are accepted on insert. Callers that need uniqueness must
/// check with [`Inventory::get`] first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item at the end, even if its id is already present.
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// First item whose id equals `id` exactly.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.has_id(id))
    }

    /// First item matching `query` by exact id; failing that, the first item
    /// whose name matches case-insensitively.
    pub fn find(&self, query: &str) -> Option<&Item> {
        self.get(query)
            .or_else(|| self.items.iter().find(|item| item.has_name(query)))
    }

    /// Overwrite quantity and price of the first item with `id`.
    ///
    /// Leaves the collection untouched and returns [`DomainError::NotFound`]
    /// when no item carries that id.
    pub fn update(&mut self, id: &str, quantity: i64, price: f64) -> DomainResult<&Item> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.has_id(id))
            .ok_or_else(DomainError::not_found)?;

        item.quantity = quantity;
        item.price = price;
        Ok(item)
    }

    /// Remove every item with `id`, keeping survivors in order.
    ///
    /// Returns how many items were dropped, or [`DomainError::NotFound`] if none.
    pub fn remove(&mut self, id: &str) -> DomainResult<usize> {
        let before = self.items.len();
        self.items.retain(|item| !item.has_id(id));

        match before - self.items.len() {
            0 => Err(DomainError::not_found()),
            removed => Ok(removed),
        }
    }

    /// Items with quantity strictly below `threshold`, in insertion order.
    pub fn low_stock(&self, threshold: i64) -> impl Iterator<Item = &Item> + '_ {
        self.items
            .iter()
            .filter(move |item| item.is_low_stock(threshold))
    }
}
