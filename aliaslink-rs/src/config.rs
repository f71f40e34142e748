//! Configuration: which folders feed the alias index, and how to link.
//!
//! The configuration is a plain value. It is loaded once, overridden by
//! command-line flags, and then passed down to the pipeline unchanged.

use crate::error::{LinkError, Result};
use crate::rewrite::RewriteOptions;
use crate::storage::{Storage, DEFAULT_BACKUP_SUFFIX};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the directory under the user config dir.
pub const CONFIG_DIR_NAME: &str = "aliaslink";

/// Name of the config file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default vault root when `--vault` is not given.
    pub vault: Option<PathBuf>,

    /// Vault-relative path prefixes whose notes make up the corpus, in
    /// priority order. Empty means the whole vault.
    pub roots: Vec<String>,

    /// Only link occurrences that are not part of a larger word.
    pub word_boundaries: bool,

    /// Suffix inserted before the extension of backup copies.
    pub backup_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vault: None,
            roots: Vec::new(),
            word_boundaries: false,
            backup_suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
        }
    }
}

impl Config {
    /// Default config file location (`~/.config/aliaslink/config.toml` on Linux).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&raw)?;
        config.validated()
    }

    /// Reject values the pipeline cannot work with.
    pub fn validated(self) -> Result<Self> {
        if self.backup_suffix.is_empty() {
            return Err(LinkError::ConfigError(
                "backup_suffix must not be empty: the backup would overwrite the note".to_string(),
            ));
        }
        if self.backup_suffix.contains(['/', '\\']) {
            return Err(LinkError::ConfigError(format!(
                "backup_suffix must not contain a path separator: {:?}",
                self.backup_suffix
            )));
        }
        Ok(self)
    }

    /// Resolve the vault root: explicit flag, then config, then the
    /// current directory.
    pub fn resolve_vault_path(&self, cli_vault: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = cli_vault {
            return Ok(path.to_path_buf());
        }
        if let Some(ref path) = self.vault {
            return Ok(path.clone());
        }
        Ok(std::env::current_dir()?)
    }

    /// Return a copy with `roots` replaced, if any are given.
    pub fn with_roots(mut self, roots: &[String]) -> Self {
        if !roots.is_empty() {
            self.roots = roots.to_vec();
        }
        self
    }

    /// Return a copy with word-boundary matching forced on.
    pub fn with_word_boundaries(mut self, enabled: bool) -> Self {
        self.word_boundaries |= enabled;
        self
    }

    /// Rewrite options derived from this config.
    pub fn rewrite_options(&self) -> RewriteOptions {
        RewriteOptions {
            word_boundaries: self.word_boundaries,
        }
    }

    /// Configured roots that do not exist in `storage`.
    pub fn missing_roots(&self, storage: &impl Storage) -> Vec<String> {
        self.roots
            .iter()
            .filter(|root| !storage.path_exists(root))
            .cloned()
            .collect()
    }

    /// Fail on the first configured root that does not exist.
    pub fn validate_roots(&self, storage: &impl Storage) -> Result<()> {
        match self.missing_roots(storage).into_iter().next() {
            Some(root) => Err(LinkError::RootNotFound(root)),
            None => Ok(()),
        }
    }
}
