//! List manager service

use crate::error::{Result, TodoError};
use crate::item::Item;
use crate::storage::Store;

/// List Manager - owns the todo collection and writes it through the store
///
/// Every successful mutation is followed by a full save. Rejected calls
/// (empty title, index out of range) leave both the collection and the
/// store untouched.
pub struct ListManager<S: Store> {
    store: S,
    items: Vec<Item>,
}

impl<S: Store> ListManager<S> {
    /// Create a new ListManager, hydrating from the store
    pub fn new(store: S) -> Self {
        let items = match store.load() {
            Some(items) => items,
            None => {
                tracing::debug!("Nothing to load, starting with an empty list");
                Vec::new()
            }
        };

        Self { store, items }
    }

    /// Items in insertion order
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a new item and persist
    pub fn add(&mut self, title: impl Into<String>) -> Result<&Item> {
        let item = Item::new(title)?;
        tracing::debug!(id = %item.id(), "Adding todo");

        self.items.push(item);
        self.persist();

        let index = self.items.len() - 1;
        Ok(&self.items[index])
    }

    /// Flip the completion flag of the item at `index` and persist
    pub fn toggle(&mut self, index: usize) -> Result<&Item> {
        self.check_index(index)?;

        self.items[index].toggle();
        self.persist();

        Ok(&self.items[index])
    }

    /// Remove the item at `index`, shifting later items down, and persist
    pub fn delete(&mut self, index: usize) -> Result<Item> {
        self.check_index(index)?;

        let removed = self.items.remove(index);
        tracing::debug!(id = %removed.id(), "Deleted todo");
        self.persist();

        Ok(removed)
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.items.len();
        if index >= len {
            return Err(TodoError::IndexOutOfRange { index, len });
        }
        Ok(())
    }

    fn persist(&mut self) {
        self.store.save(&self.items);
    }
}
