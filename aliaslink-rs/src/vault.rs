//! Vault representation: the filesystem implementation of [`Storage`].

use crate::error::{LinkError, Result};
use crate::note::Note;
use crate::storage::Storage;
use crate::types::Entity;
use glob::glob;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A directory of markdown notes.
#[derive(Debug, Clone)]
pub struct Vault {
    /// Root path of the vault.
    pub root: PathBuf,
}

impl Vault {
    /// Create a new vault instance.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.is_dir() {
            return Err(LinkError::VaultNotFound(root));
        }

        Ok(Self { root })
    }

    /// Get the full path to a note.
    pub fn note_path(&self, relative_path: &Path) -> PathBuf {
        self.root.join(relative_path)
    }

    /// Normalize a note path (add .md extension if needed).
    pub fn normalize_note_path(&self, path: &str) -> PathBuf {
        let path = path.trim();
        if path.ends_with(".md") {
            PathBuf::from(path)
        } else {
            PathBuf::from(format!("{}.md", path))
        }
    }

    /// Check if a note exists.
    pub fn note_exists(&self, relative_path: &Path) -> bool {
        self.note_path(relative_path).is_file()
    }

    /// Load a note from the vault.
    pub fn load_note(&self, relative_path: &Path) -> Result<Note> {
        if !self.note_exists(relative_path) {
            return Err(LinkError::NoteNotFound(relative_path.to_path_buf()));
        }
        let content = self.read_text(relative_path)?;
        Ok(Note::new(relative_path, content))
    }

    /// List all markdown files in the vault, sorted by path.
    pub fn list_notes(&self) -> Result<Vec<PathBuf>> {
        let pattern = self.root.join("**/*.md");
        let pattern_str = pattern.to_string_lossy();

        let mut notes = Vec::new();

        for entry in glob(&pattern_str)? {
            match entry {
                Ok(path) => {
                    if !path.is_file() {
                        continue;
                    }
                    if let Ok(relative) = path.strip_prefix(&self.root) {
                        // Skip hidden files and directories
                        if !relative
                            .components()
                            .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
                        {
                            notes.push(relative.to_path_buf());
                        }
                    }
                }
                Err(e) => {
                    // Log but continue on glob errors
                    warn!(error = %e, "glob error while listing notes");
                }
            }
        }

        notes.sort();

        Ok(notes)
    }

    /// Resolve a note reference to a vault-relative path.
    ///
    /// Handles exact paths (with or without `.md`) and bare note names,
    /// matched case-insensitively against file stems.
    pub fn resolve_note(&self, query: &str) -> Result<PathBuf> {
        let normalized = self.normalize_note_path(query);

        if self.note_exists(&normalized) {
            return Ok(normalized);
        }

        let query_path = PathBuf::from(query.trim());
        if self.note_exists(&query_path) {
            return Ok(query_path);
        }

        let query_lower = query.trim().trim_end_matches(".md").to_lowercase();
        let matches: Vec<PathBuf> = self
            .list_notes()?
            .into_iter()
            .filter(|path| {
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .is_some_and(|stem| stem.to_lowercase() == query_lower)
            })
            .collect();

        match matches.len() {
            0 => Err(LinkError::NoteNotFound(PathBuf::from(query))),
            1 => Ok(matches.into_iter().next().unwrap_or_default()),
            _ => Err(LinkError::AmbiguousResolution {
                query: query.to_string(),
                count: matches.len(),
                matches,
            }),
        }
    }
}

impl Storage for Vault {
    fn list_entities(&self) -> Result<Vec<Entity>> {
        Ok(self
            .list_notes()?
            .into_iter()
            .map(Entity::from_path)
            .collect())
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(self.note_path(path)).map_err(|e| LinkError::storage(path, e))
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        let full_path = self.note_path(path);

        // Ensure parent directory exists
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| LinkError::storage(path, e))?;
        }

        std::fs::write(&full_path, content).map_err(|e| LinkError::storage(path, e))
    }

    fn path_exists(&self, prefix: &str) -> bool {
        let prefix = prefix.trim_end_matches('/');
        prefix.is_empty() || self.root.join(prefix).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_vault() -> (TempDir, Vault) {
        let dir = TempDir::new().unwrap();
        let vault = Vault::new(dir.path()).unwrap();
        (dir, vault)
    }

    #[test]
    fn test_missing_vault() {
        let dir = TempDir::new().unwrap();
        let result = Vault::new(dir.path().join("nope"));
        assert!(matches!(result, Err(LinkError::VaultNotFound(_))));
    }

    #[test]
    fn test_write_and_load_note() {
        let (_dir, vault) = setup_test_vault();

        let path = PathBuf::from("sub/folder/test.md");
        vault.write_text(&path, "Hello, world!").unwrap();

        assert!(vault.note_exists(&path));
        let note = vault.load_note(&path).unwrap();
        assert_eq!(note.content, "Hello, world!");
        assert_eq!(note.id(), "test");
    }

    #[test]
    fn test_load_missing_note() {
        let (_dir, vault) = setup_test_vault();
        let result = vault.load_note(Path::new("missing.md"));
        assert!(matches!(result, Err(LinkError::NoteNotFound(_))));
    }

    #[test]
    fn test_read_failure_is_storage_error() {
        let (_dir, vault) = setup_test_vault();
        let result = vault.read_text(Path::new("missing.md"));
        assert!(matches!(result, Err(LinkError::Storage { .. })));
    }

    #[test]
    fn test_list_entities_sorted_and_skips_hidden() {
        let (_dir, vault) = setup_test_vault();

        vault.write_text(Path::new("b.md"), "B").unwrap();
        vault.write_text(Path::new("a.md"), "A").unwrap();
        vault.write_text(Path::new("sub/c.md"), "C").unwrap();
        vault.write_text(Path::new(".obsidian/hidden.md"), "H").unwrap();
        vault.write_text(Path::new("notes.txt"), "T").unwrap();

        let entities = vault.list_entities().unwrap();
        let ids: Vec<&str> = entities.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(entities[2].path, PathBuf::from("sub/c.md"));
    }

    #[test]
    fn test_path_exists() {
        let (_dir, vault) = setup_test_vault();
        vault.write_text(Path::new("requirements/a.md"), "A").unwrap();

        assert!(vault.path_exists("requirements"));
        assert!(vault.path_exists("requirements/"));
        assert!(vault.path_exists("requirements/a.md"));
        assert!(!vault.path_exists("designs"));
    }

    #[test]
    fn test_normalize_note_path() {
        let (_dir, vault) = setup_test_vault();

        assert_eq!(vault.normalize_note_path("note"), PathBuf::from("note.md"));
        assert_eq!(vault.normalize_note_path("note.md"), PathBuf::from("note.md"));
        assert_eq!(
            vault.normalize_note_path("folder/note"),
            PathBuf::from("folder/note.md")
        );
    }

    #[test]
    fn test_resolve_note() {
        let (_dir, vault) = setup_test_vault();
        vault.write_text(Path::new("requirements/ABCD.md"), "A").unwrap();

        assert_eq!(
            vault.resolve_note("requirements/ABCD").unwrap(),
            PathBuf::from("requirements/ABCD.md")
        );
        assert_eq!(
            vault.resolve_note("abcd").unwrap(),
            PathBuf::from("requirements/ABCD.md")
        );
        assert!(matches!(
            vault.resolve_note("missing"),
            Err(LinkError::NoteNotFound(_))
        ));
    }

    #[test]
    fn test_resolve_note_ambiguous() {
        let (_dir, vault) = setup_test_vault();
        vault.write_text(Path::new("a/Same.md"), "1").unwrap();
        vault.write_text(Path::new("b/Same.md"), "2").unwrap();

        let result = vault.resolve_note("Same");
        assert!(matches!(
            result,
            Err(LinkError::AmbiguousResolution { count: 2, .. })
        ));
    }
}
