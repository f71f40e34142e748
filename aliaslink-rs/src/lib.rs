//! aliaslink - link note names and their aliases inside Obsidian-style notes.
//!
//! # Overview
//!
//! Given a corpus of notes, aliaslink turns plain-text mentions of a note's
//! name or any of its `aliases` into wikilinks:
//! - `ABCD` becomes `[[ABCD]]`
//! - an alias `AA` of `ABCD` becomes `[[ABCD|AA]]`
//!
//! Longer names are matched before shorter ones, existing links are never
//! touched, and the header block of the rewritten note is preserved
//! byte for byte. Running the rewrite twice changes nothing the second time.
//!
//! # Example
//!
//! ```
//! use aliaslink::{build_index, extract_aliases, rewrite_body, EntityAliases};
//!
//! let aliases = extract_aliases("---\naliases: [alpha, AA]\n---\n");
//! let index = build_index(&[
//!     EntityAliases::new("ABCD", aliases),
//!     EntityAliases::new("BCD", vec!["beta".into(), "BB".into()]),
//! ]);
//!
//! assert_eq!(
//!     rewrite_body("I read ABCD, then AA and BCD", &index),
//!     "I read [[ABCD]], then [[ABCD|AA]] and [[BCD]]"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod index;
pub mod linker;
pub mod note;
pub mod parser;
pub mod rewrite;
pub mod storage;
pub mod types;
pub mod vault;

// Re-export main types at crate root
pub use config::Config;
pub use corpus::{scan_corpus, Corpus, Exclusion};
pub use error::{LinkError, Result};
pub use index::{build_index, AliasConflict, AliasIndex};
pub use linker::{LinkReport, Linker};
pub use note::Note;
pub use parser::{extract_aliases, reassemble, split_header};
pub use rewrite::{rewrite_body, rewrite_body_with, Rewrite, RewriteOptions};
pub use storage::{backup_path, Storage};
pub use types::*;
pub use vault::Vault;
