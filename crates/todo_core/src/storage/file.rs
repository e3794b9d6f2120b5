use std::fs;
use std::path::{Path, PathBuf};

use super::Store;
use crate::config::{default_data_dir, DEFAULT_FILENAME};
use crate::error::StoreError;
use crate::item::Item;

/// JSON file store.
///
/// The whole collection is written as one JSON array and read back the same
/// way. Read and write failures are logged by the [`Store`] impl and never
/// reach the caller.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by [`DEFAULT_FILENAME`] inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_FILENAME))
    }

    /// Store in the user's document directory
    pub fn default_location() -> Self {
        Self::in_dir(default_data_dir())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the todo file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the collection from disk.
    ///
    /// Returns `Ok(None)` if the file doesn't exist or is blank.
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read(&self) -> Result<Option<Vec<Item>>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let items = serde_json::from_str(&content).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(Some(items))
    }

    /// Write the collection to disk, replacing the previous file
    pub fn write(&self, items: &[Item]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Write {
                    path: self.path.clone(),
                    source: e,
                })?;
            }
        }

        let content = serde_json::to_string_pretty(items).map_err(|e| StoreError::Serialize {
            path: self.path.clone(),
            source: e,
        })?;

        fs::write(&self.path, content).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl Store for FileStore {
    fn save(&mut self, items: &[Item]) {
        match self.write(items) {
            Ok(()) => tracing::debug!(
                path = %self.path.display(),
                count = items.len(),
                "Saved todos"
            ),
            Err(e) => tracing::warn!("Todos were not saved: {}", e),
        }
    }

    fn load(&self) -> Option<Vec<Item>> {
        match self.read() {
            Ok(Some(items)) => {
                tracing::debug!(
                    path = %self.path.display(),
                    count = items.len(),
                    "Loaded todos"
                );
                Some(items)
            }
            Ok(None) => {
                tracing::debug!(path = %self.path.display(), "No saved todos");
                None
            }
            Err(e) => {
                tracing::warn!("Ignoring saved todos: {}", e);
                None
            }
        }
    }
}
