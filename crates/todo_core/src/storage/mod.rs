//! Store trait and implementations

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::item::Item;

/// Whole-collection persistence.
///
/// Implementations never fail hard: a `save` that cannot complete is logged
/// and dropped, and a `load` that cannot complete returns `None`.
pub trait Store {
    /// Persist the entire collection, replacing whatever was stored before
    fn save(&mut self, items: &[Item]);

    /// Load the most recently saved collection.
    ///
    /// `None` means there is nothing usable to load and the caller should
    /// start fresh. It is not the same as a saved empty collection.
    fn load(&self) -> Option<Vec<Item>>;
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn save(&mut self, items: &[Item]) {
        (**self).save(items)
    }

    fn load(&self) -> Option<Vec<Item>> {
        (**self).load()
    }
}
