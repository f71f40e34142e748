//! Host storage interface.
//!
//! The engine never touches a filesystem directly. Everything it reads or
//! writes goes through [`Storage`], which [`crate::Vault`] implements for a
//! directory on disk.

use crate::error::Result;
use crate::types::Entity;
use std::path::{Path, PathBuf};

/// Suffix inserted before the extension of a backup copy.
pub const DEFAULT_BACKUP_SUFFIX: &str = "_copy";

/// Storage provided by the host.
///
/// Implementations must be `Sync`: corpus reads are issued concurrently.
pub trait Storage: Sync {
    /// All addressable notes, in a stable order.
    fn list_entities(&self) -> Result<Vec<Entity>>;

    /// Read a note's raw text.
    fn read_text(&self, path: &Path) -> Result<String>;

    /// Write a note's raw text, creating or replacing it.
    fn write_text(&self, path: &Path, content: &str) -> Result<()>;

    /// Whether a path prefix (file or folder) exists.
    fn path_exists(&self, prefix: &str) -> bool;
}

/// Path of the backup copy for `path`, beside the original.
///
/// `dir/note.md` becomes `dir/note_copy.md`; a name without an extension
/// gets the suffix appended.
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let file_name = match path.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };

    path.with_file_name(file_name)
}

/// The path `path` would have been backed up from with `suffix`.
///
/// Inverse of [`backup_path`]: `dir/note_copy.md` yields `dir/note.md`.
/// Returns `None` when the stem does not carry the suffix. Whether the
/// original actually exists is for the caller to decide.
pub fn backup_original(path: &Path, suffix: &str) -> Option<PathBuf> {
    if suffix.is_empty() {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    let original = stem.strip_suffix(suffix).filter(|s| !s.is_empty())?;

    let file_name = match path.extension() {
        Some(ext) => format!("{}.{}", original, ext.to_string_lossy()),
        None => original.to_string(),
    };
    Some(path.with_file_name(file_name))
}
