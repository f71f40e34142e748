//! Note representation.

use crate::parser::extract_aliases;
use std::path::PathBuf;

/// A note loaded from storage.
#[derive(Debug, Clone)]
pub struct Note {
    /// Path relative to the storage root (e.g., "requirements/ABCD.md").
    pub path: PathBuf,

    /// Raw content of the note.
    pub content: String,
}

impl Note {
    /// Create a new note from path and content.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// The note's canonical name (filename without extension).
    pub fn id(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
    }

    /// Alternate names declared in the header.
    pub fn aliases(&self) -> Vec<String> {
        extract_aliases(&self.content)
    }
}
