//! Error types and exit codes for aliaslink.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes used by the CLI.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOTE_NOT_FOUND: i32 = 2;
    pub const BACKUP_FAILED: i32 = 3;
    pub const AMBIGUOUS_RESOLUTION: i32 = 4;
    pub const ROOT_NOT_FOUND: i32 = 5;
    pub const STORAGE_ERROR: i32 = 6;
}

/// Main error type for aliaslink operations.
///
/// Only storage and configuration boundaries produce errors. Parsing and
/// rewriting are total over any text input.
#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Note not found: {0}")]
    NoteNotFound(PathBuf),

    #[error("Ambiguous resolution: {count} notes match '{query}'")]
    AmbiguousResolution {
        query: String,
        count: usize,
        matches: Vec<PathBuf>,
    },

    #[error("Vault not found at: {0}")]
    VaultNotFound(PathBuf),

    #[error("Configured root does not exist in the vault: {0}")]
    RootNotFound(String),

    #[error("Failed to create backup {path}: {source}")]
    BackupFailed {
        path: PathBuf,
        #[source]
        source: Box<LinkError>,
    },

    #[error("Storage error on {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML serialize error: {0}")]
    YamlSerialize(#[from] serde_yaml::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),
}

impl LinkError {
    /// Wrap an I/O failure with the path it happened on.
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LinkError::Storage {
            path: path.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LinkError::NoteNotFound(_) => exit_code::NOTE_NOT_FOUND,
            LinkError::AmbiguousResolution { .. } => exit_code::AMBIGUOUS_RESOLUTION,
            LinkError::BackupFailed { .. } => exit_code::BACKUP_FAILED,
            LinkError::RootNotFound(_) => exit_code::ROOT_NOT_FOUND,
            LinkError::Storage { .. } => exit_code::STORAGE_ERROR,
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for aliaslink operations.
pub type Result<T> = std::result::Result<T, LinkError>;
