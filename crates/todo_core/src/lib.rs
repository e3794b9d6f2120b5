//! # Todo Core
//!
//! Persistence-backed todo list management.
//! Items live in an ordered in-memory collection owned by [`ListManager`],
//! which writes the whole collection through a [`Store`] after every change.

pub mod config;
pub mod error;
pub mod item;
pub mod manager;
pub mod storage;

// Re-exports
pub use error::{Result, StoreError, TodoError};
pub use item::Item;
pub use manager::ListManager;
pub use storage::{FileStore, MemoryStore, Store};
