//! Shared types for aliaslink.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// An addressable note in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Canonical name (the file stem, e.g. "ABCD" for "requirements/ABCD.md").
    pub id: String,

    /// Path relative to the storage root.
    pub path: PathBuf,
}

impl Entity {
    /// Create an entity whose id is derived from the path's file stem.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();
        Self { id, path }
    }

    /// The path as a `/`-separated string, used for root-prefix filtering.
    pub fn path_str(&self) -> String {
        self.path.to_string_lossy().replace('\\', "/")
    }
}

/// An entity id together with the alternate names read from its header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityAliases {
    pub id: String,
    pub aliases: Vec<String>,
}

impl EntityAliases {
    pub fn new(id: impl Into<String>, aliases: Vec<String>) -> Self {
        Self {
            id: id.into(),
            aliases,
        }
    }
}

/// One flattened `(owner, text)` pair of the substitution index.
///
/// `text` is either an alternate name or the owner's own id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub owner: String,
    pub text: String,
}

impl AliasEntry {
    pub fn new(owner: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            text: text.into(),
        }
    }

    /// Length used for index ordering, counted in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A raw note split into its protected header and rewritable body.
///
/// `header` followed by `body` reproduces the original text exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document<'a> {
    /// The leading `---` delimited block including both delimiter lines
    /// and the trailing line break, or `""` when there is none.
    pub header: &'a str,

    /// Everything after the header.
    pub body: &'a str,
}

impl Document<'_> {
    pub fn has_header(&self) -> bool {
        !self.header.is_empty()
    }
}

/// A single substitution applied by the rewriter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    /// Entity the matched text resolved to.
    pub owner: String,

    /// The text that was matched in the body.
    pub text: String,

    /// The link markup that replaced it.
    pub markup: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_from_path() {
        let entity = Entity::from_path("requirements/sub/ABCD.md");
        assert_eq!(entity.id, "ABCD");
        assert_eq!(entity.path_str(), "requirements/sub/ABCD.md");
    }

    #[test]
    fn test_entity_from_path_with_dots() {
        let entity = Entity::from_path("notes/v1.2 release.md");
        assert_eq!(entity.id, "v1.2 release");
    }

    #[test]
    fn test_alias_entry_len_counts_chars() {
        let entry = AliasEntry::new("東京", "東京");
        assert_eq!(entry.len(), 2);
    }
}
