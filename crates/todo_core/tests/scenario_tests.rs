//! End-to-end scenarios for the list manager over both stores

use std::fs;

use tempfile::tempdir;
use todo_core::{FileStore, ListManager, MemoryStore, Store};

#[test]
fn test_file_store_scenario() {
    let dir = tempdir().unwrap();
    let mut manager = ListManager::new(FileStore::in_dir(dir.path()));

    manager.add("Buy milk").unwrap();
    manager.add("Walk dog").unwrap();
    manager.toggle(0).unwrap();
    manager.delete(1).unwrap();

    assert_eq!(manager.len(), 1);
    assert_eq!(manager.list()[0].title(), "Buy milk");
    assert!(manager.list()[0].is_completed());

    // A fresh manager over the same file sees the same list
    let reopened = ListManager::new(FileStore::in_dir(dir.path()));
    assert_eq!(reopened.list(), manager.list());
}

#[test]
fn test_persists_across_managers() {
    let dir = tempdir().unwrap();
    let store = FileStore::in_dir(dir.path());

    let ids = {
        let mut manager = ListManager::new(store.clone());
        manager.add("one").unwrap();
        manager.add("two ✨").unwrap();
        manager.toggle(1).unwrap();
        manager.list().iter().map(|item| item.id()).collect::<Vec<_>>()
    };

    let manager = ListManager::new(store);
    let loaded_ids = manager.list().iter().map(|item| item.id()).collect::<Vec<_>>();
    assert_eq!(loaded_ids, ids);
    assert!(!manager.list()[0].is_completed());
    assert!(manager.list()[1].is_completed());
    assert_eq!(manager.list()[1].title(), "two ✨");
}

#[test]
fn test_malformed_file_starts_fresh_and_is_overwritten() {
    let dir = tempdir().unwrap();
    let store = FileStore::in_dir(dir.path());
    fs::write(store.path(), "[{\"id\": 42}]").unwrap();

    let mut manager = ListManager::new(store.clone());
    assert!(manager.is_empty());

    manager.add("recovered").unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title(), "recovered");
}

#[test]
fn test_unwritable_store_keeps_memory_authoritative() {
    let dir = tempdir().unwrap();
    // The path is a directory, so every save fails.
    let mut manager = ListManager::new(FileStore::new(dir.path()));

    manager.add("still here").unwrap();
    manager.toggle(0).unwrap();

    assert_eq!(manager.len(), 1);
    assert!(manager.list()[0].is_completed());
    assert_eq!(manager.store().load(), None);
}

/// FileStore reports `None` before the first save, MemoryStore reports an
/// empty collection. Both hydrate the manager to an empty list.
#[test]
fn test_never_saved_load_asymmetry() {
    let dir = tempdir().unwrap();
    let file_store = FileStore::in_dir(dir.path());
    let memory_store = MemoryStore::new();

    assert_eq!(file_store.load(), None);
    assert_eq!(memory_store.load(), Some(Vec::new()));

    assert!(ListManager::new(file_store).is_empty());
    assert!(ListManager::new(memory_store).is_empty());
}

#[test]
fn test_boxed_store() {
    let store: Box<dyn Store> = Box::new(MemoryStore::new());
    let mut manager = ListManager::new(store);

    manager.add("boxed").unwrap();

    assert_eq!(manager.store().load().unwrap().len(), 1);
}
