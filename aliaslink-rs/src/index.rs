//! The ordered substitution index.
//!
//! Every entity contributes its alternate names followed by its own id.
//! The flattened list is then stable-sorted by descending text length, so
//! longer names are always tried before any shorter name that could be a
//! substring of them, and equal-length entries keep their scan order.

use crate::parser::wikilink::is_linkable;
use crate::types::{AliasEntry, EntityAliases};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Ordered list of alias entries, non-increasing by text length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AliasIndex {
    entries: Vec<AliasEntry>,
}

/// An alternate-name text claimed by more than one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasConflict {
    pub text: String,
    /// The earliest-scanned owner; every occurrence links here.
    pub winner: String,
    /// Owners whose claim on `text` is never applied.
    pub shadowed: Vec<String>,
}

/// Build the substitution index from entities in scan order.
///
/// Entries with empty text are skipped, as are entries whose owner or text
/// contain link-markup characters (the resulting markup would not parse
/// back as a single link). A repeated `(owner, text)` pair is kept once.
pub fn build_index(entities: &[EntityAliases]) -> AliasIndex {
    let mut entries = Vec::new();
    let mut seen: HashSet<(&str, &str)> = HashSet::new();

    for entity in entities {
        if !is_linkable(&entity.id) {
            debug!(id = %entity.id, "skipping entity whose name cannot be linked");
            continue;
        }

        let texts = entity
            .aliases
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(entity.id.as_str()));

        for text in texts {
            if !is_linkable(text) {
                if !text.is_empty() {
                    debug!(owner = %entity.id, text, "skipping alias containing link markup");
                }
                continue;
            }
            if seen.insert((entity.id.as_str(), text)) {
                entries.push(AliasEntry::new(&entity.id, text));
            }
        }
    }

    AliasIndex::from_entries(entries)
}

impl AliasIndex {
    /// Build an index from entries that may not be in match order.
    ///
    /// Unlinkable entries are dropped. The rest are stable-sorted by
    /// descending length, so equal lengths keep their given order.
    pub fn from_entries(mut entries: Vec<AliasEntry>) -> Self {
        entries.retain(|e| is_linkable(&e.owner) && is_linkable(&e.text));
        entries.sort_by(|a, b| b.len().cmp(&a.len()));
        AliasIndex { entries }
    }

    /// Entries in match order.
    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AliasEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Texts claimed by more than one entity, in index order.
    pub fn conflicts(&self) -> Vec<AliasConflict> {
        let mut order: Vec<&str> = Vec::new();
        let mut owners: HashMap<&str, Vec<&str>> = HashMap::new();

        for entry in &self.entries {
            let claimants = owners.entry(entry.text.as_str()).or_insert_with(|| {
                order.push(entry.text.as_str());
                Vec::new()
            });
            if !claimants.contains(&entry.owner.as_str()) {
                claimants.push(entry.owner.as_str());
            }
        }

        order
            .into_iter()
            .filter_map(|text| {
                let claimants = owners.remove(text)?;
                let (winner, shadowed) = claimants.split_first()?;
                if shadowed.is_empty() {
                    return None;
                }
                Some(AliasConflict {
                    text: text.to_string(),
                    winner: winner.to_string(),
                    shadowed: shadowed.iter().map(|s| s.to_string()).collect(),
                })
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a AliasIndex {
    type Item = &'a AliasEntry;
    type IntoIter = std::slice::Iter<'a, AliasEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entity(id: &str, aliases: &[&str]) -> EntityAliases {
        EntityAliases::new(id, aliases.iter().map(|s| s.to_string()).collect())
    }

    fn texts(index: &AliasIndex) -> Vec<&str> {
        index.iter().map(|e| e.text.as_str()).collect()
    }

    #[test]
    fn test_longest_first_then_scan_order() {
        let index = build_index(&[entity("ABCD", &["a", "AA"]), entity("BCD", &["b", "BB"])]);
        assert_eq!(texts(&index), vec!["ABCD", "BCD", "AA", "BB", "a", "b"]);
    }

    #[test]
    fn test_equal_length_follows_scan_order() {
        let index = build_index(&[entity("BCD", &["b", "BB"]), entity("ABCD", &["a", "AA"])]);
        assert_eq!(texts(&index), vec!["ABCD", "BCD", "BB", "AA", "b", "a"]);
    }

    #[test]
    fn test_non_increasing_lengths() {
        let index = build_index(&[
            entity("x", &["medium", "a much longer alias", "mid"]),
            entity("Some Note", &["sn", "s"]),
        ]);
        let lengths: Vec<usize> = index.iter().map(|e| e.len()).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_owner_recorded() {
        let index = build_index(&[entity("ABCD", &["a"])]);
        assert_eq!(index.entries()[0], AliasEntry::new("ABCD", "ABCD"));
        assert_eq!(index.entries()[1], AliasEntry::new("ABCD", "a"));
    }

    #[test]
    fn test_skips_empty_and_markup_texts() {
        let index = build_index(&[entity("ABCD", &["", "a|b", "[x]", "ok"])]);
        assert_eq!(texts(&index), vec!["ABCD", "ok"]);

        let index = build_index(&[entity("", &["orphan"])]);
        assert!(index.is_empty());
    }

    #[test]
    fn test_collapses_repeated_pairs() {
        let index = build_index(&[entity("ABCD", &["a", "a", "ABCD"])]);
        assert_eq!(texts(&index), vec!["ABCD", "a"]);
    }

    #[test]
    fn test_conflicts_earliest_wins() {
        let index = build_index(&[
            entity("First", &["shared", "one"]),
            entity("Second", &["shared"]),
            entity("Third", &["shared", "one"]),
        ]);
        let conflicts = index.conflicts();
        assert_eq!(
            conflicts,
            vec![
                AliasConflict {
                    text: "shared".to_string(),
                    winner: "First".to_string(),
                    shadowed: vec!["Second".to_string(), "Third".to_string()],
                },
                AliasConflict {
                    text: "one".to_string(),
                    winner: "First".to_string(),
                    shadowed: vec!["Third".to_string()],
                },
            ]
        );
        let first_shared = index.iter().find(|e| e.text == "shared").unwrap();
        assert_eq!(first_shared.owner, "First");
    }

    #[test]
    fn test_from_entries_restores_order() {
        let index = AliasIndex::from_entries(vec![
            AliasEntry::new("BCD", "b"),
            AliasEntry::new("ABCD", "ABCD"),
            AliasEntry::new("BCD", "BB"),
            AliasEntry::new("ABCD", "AA"),
            AliasEntry::new("ABCD", "a]"),
        ]);
        assert_eq!(texts(&index), vec!["ABCD", "BB", "AA", "b"]);
    }

    #[test]
    fn test_no_conflicts() {
        let index = build_index(&[entity("ABCD", &["a"]), entity("BCD", &["b"])]);
        assert!(index.conflicts().is_empty());
    }
}
