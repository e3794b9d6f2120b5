//! Default location of the todo file.

use std::path::PathBuf;

/// File name used when only a directory is given
pub const DEFAULT_FILENAME: &str = "todos.json";

/// Directory the todo file lives in by default.
///
/// Uses the per-user document directory, then the home directory, then the
/// current directory.
pub fn default_data_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
