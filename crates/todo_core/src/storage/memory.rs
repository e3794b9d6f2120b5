use super::Store;
use crate::item::Item;

/// Process-local store.
///
/// Always has a collection to hand back: `load` returns the empty collection
/// until the first save, never `None`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Vec<Item>,
    save_count: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already-saved collection
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items,
            save_count: 0,
        }
    }

    /// Last saved collection
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of saves performed so far
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl Store for MemoryStore {
    fn save(&mut self, items: &[Item]) {
        self.items = items.to_vec();
        self.save_count += 1;
        tracing::debug!(count = items.len(), "Saved todos in memory");
    }

    fn load(&self) -> Option<Vec<Item>> {
        Some(self.items.clone())
    }
}
