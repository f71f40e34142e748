//! Corpus scan: which notes feed the alias index.
//!
//! Notes under the configured roots are read concurrently. A note that
//! cannot be read is excluded and reported; it never aborts the scan.
//! Scan order is the storage listing order, which decides who wins when
//! two notes claim the same alternate name.

use crate::error::Result;
use crate::parser::extract_aliases;
use crate::storage::{backup_original, Storage};
use crate::types::{Entity, EntityAliases};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, warn};

/// A note left out of the corpus because it could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exclusion {
    pub path: PathBuf,
    pub reason: String,
}

/// The result of a corpus scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Corpus {
    /// Entities with their alternate names, in scan order.
    pub entities: Vec<EntityAliases>,

    /// Entities that were skipped because reading them failed.
    pub excluded: Vec<Exclusion>,
}

/// Whether `entity` lives under one of `roots`.
///
/// Matching is a plain prefix test on the `/`-separated path. An empty
/// root list admits everything.
pub fn in_roots(entity: &Entity, roots: &[String]) -> bool {
    if roots.is_empty() {
        return true;
    }
    let path = entity.path_str();
    roots.iter().any(|root| path.starts_with(root.as_str()))
}

/// Whether `entity` is the backup copy of another listed note.
///
/// A stem ending in the suffix is not enough: `Data_copy.md` is only a
/// backup when `Data.md` sits beside it.
fn is_backup_of_listed(entity: &Entity, listed: &HashSet<PathBuf>, suffix: &str) -> bool {
    backup_original(&entity.path, suffix).is_some_and(|original| listed.contains(&original))
}

/// Scan the corpus: filter by roots, read every note, extract aliases.
pub fn scan_corpus(
    storage: &impl Storage,
    roots: &[String],
    backup_suffix: &str,
) -> Result<Corpus> {
    let listing = storage.list_entities()?;
    let listed: HashSet<PathBuf> = listing.iter().map(|e| e.path.clone()).collect();

    let entities: Vec<Entity> = listing
        .into_iter()
        .filter(|e| in_roots(e, roots))
        .filter(|e| {
            let backup = is_backup_of_listed(e, &listed, backup_suffix);
            if backup {
                debug!(path = %e.path.display(), "skipping backup copy");
            }
            !backup
        })
        .collect();

    debug!(count = entities.len(), "reading corpus");

    // Reads run in parallel; collect() keeps listing order
    let reads: Vec<(Entity, Result<String>)> = entities
        .into_par_iter()
        .map(|entity| {
            let text = storage.read_text(&entity.path);
            (entity, text)
        })
        .collect();

    let mut corpus = Corpus::default();
    for (entity, text) in reads {
        match text {
            Ok(text) => {
                let aliases = extract_aliases(&text);
                debug!(id = %entity.id, aliases = aliases.len(), "scanned");
                corpus.entities.push(EntityAliases::new(entity.id, aliases));
            }
            Err(e) => {
                warn!(path = %entity.path.display(), error = %e, "excluding unreadable note");
                corpus.excluded.push(Exclusion {
                    path: entity.path,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(corpus)
}
