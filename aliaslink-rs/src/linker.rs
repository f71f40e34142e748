//! The linking pipeline: scan, index, rewrite, back up, persist.

use crate::config::Config;
use crate::corpus::{scan_corpus, Corpus, Exclusion};
use crate::error::{LinkError, Result};
use crate::index::{build_index, AliasIndex};
use crate::parser::{reassemble, split_header};
use crate::rewrite::rewrite_body_with;
use crate::storage::{backup_path, Storage};
use crate::types::Substitution;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What happened to one note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    pub path: PathBuf,

    /// Whether the rewritten content differs from the original.
    pub changed: bool,

    /// Whether anything was written (false for dry runs).
    pub written: bool,

    /// Where the pre-rewrite copy was saved, if one was made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<PathBuf>,

    pub links: Vec<Substitution>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excluded: Vec<Exclusion>,

    /// The rewritten content, included for dry runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Runs the pipeline against a storage backend with a fixed config.
pub struct Linker<'a, S: Storage> {
    storage: &'a S,
    config: &'a Config,
}

impl<'a, S: Storage> Linker<'a, S> {
    pub fn new(storage: &'a S, config: &'a Config) -> Self {
        Self { storage, config }
    }

    /// Scan the configured corpus.
    ///
    /// Missing roots are logged; their notes are simply absent.
    pub fn scan(&self) -> Result<Corpus> {
        for root in self.config.missing_roots(self.storage) {
            warn!(root = %root, "configured root does not exist");
        }
        scan_corpus(self.storage, &self.config.roots, &self.config.backup_suffix)
    }

    /// Scan the corpus and build a fresh index from it.
    pub fn build_index(&self) -> Result<(AliasIndex, Vec<Exclusion>)> {
        let corpus = self.scan()?;
        let index = build_index(&corpus.entities);
        debug!(entries = index.len(), "alias index built");
        Ok((index, corpus.excluded))
    }

    /// Link one note against the current corpus.
    ///
    /// On a real run the original content is copied to the backup path
    /// before the note is overwritten. If the backup cannot be written the
    /// note is left untouched. If the final write fails, the backup stays.
    pub fn link_note(&self, path: &Path, dry_run: bool) -> Result<LinkReport> {
        let (index, excluded) = self.build_index()?;
        self.link_note_with(path, &index, excluded, dry_run)
    }

    /// Link one note against a prebuilt index.
    pub fn link_note_with(
        &self,
        path: &Path,
        index: &AliasIndex,
        excluded: Vec<Exclusion>,
        dry_run: bool,
    ) -> Result<LinkReport> {
        let original = self.storage.read_text(path)?;

        let doc = split_header(&original);
        let rewrite = rewrite_body_with(doc.body, index, &self.config.rewrite_options());
        let content = reassemble(doc.header, &rewrite.body);
        let changed = content != original;

        let mut report = LinkReport {
            path: path.to_path_buf(),
            changed,
            written: false,
            backup: None,
            links: rewrite.substitutions,
            excluded,
            content: None,
        };

        if dry_run {
            report.content = Some(content);
            return Ok(report);
        }

        if !changed {
            debug!(path = %path.display(), "nothing to link");
            return Ok(report);
        }

        let backup = backup_path(path, &self.config.backup_suffix);
        self.storage
            .write_text(&backup, &original)
            .map_err(|e| LinkError::BackupFailed {
                path: backup.clone(),
                source: Box::new(e),
            })?;
        report.backup = Some(backup);

        self.storage.write_text(path, &content)?;
        report.written = true;

        info!(
            path = %path.display(),
            links = report.links.len(),
            "note linked"
        );

        Ok(report)
    }
}
