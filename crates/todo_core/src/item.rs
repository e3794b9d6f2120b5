//! Todo item

use crate::error::{Result, TodoError};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single todo entry.
///
/// The `id` is assigned once at creation and never changes. Serialized with
/// the `isCompleted` key so files stay compatible with existing todo lists.
///
/// Deserialization trusts the stored document: a saved item is loaded as-is,
/// even one whose title [`Item::new`] would refuse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: Uuid,
    title: String,
    #[serde(rename = "isCompleted")]
    completed: bool,
}

impl Item {
    /// Create a new, incomplete item.
    ///
    /// The title is stored exactly as given. Returns [`TodoError::EmptyTitle`]
    /// if it is empty.
    pub fn new(title: impl Into<String>) -> Result<Self> {
        let title = title.into();
        if title.is_empty() {
            return Err(TodoError::EmptyTitle);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            completed: false,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Flip the completion flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    fn glyph(&self) -> &'static str {
        if self.completed {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.glyph(), self.title)
    }
}
