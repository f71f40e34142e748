//! Node.js bindings for aliaslink.
//!
//! Exposes the pure linking functions plus a vault-backed linker to
//! Node.js/TypeScript hosts.

#![deny(clippy::all)]

use napi::bindgen_prelude::*;
use napi_derive::napi;
use std::path::PathBuf;

use aliaslink::config::Config;
use aliaslink::index::AliasIndex;
use aliaslink::types::{AliasEntry, EntityAliases, Substitution};
use aliaslink::{LinkReport, Linker, RewriteOptions, Vault};

// ============================================================================
// Types for JavaScript
// ============================================================================

#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsEntityAliases {
    pub id: String,
    pub aliases: Vec<String>,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsAliasEntry {
    pub owner: String,
    pub text: String,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsDocument {
    pub header: String,
    pub body: String,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsSubstitution {
    pub owner: String,
    pub text: String,
    pub markup: String,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsRewrite {
    pub body: String,
    pub substitutions: Vec<JsSubstitution>,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsExclusion {
    pub path: String,
    pub reason: String,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsLinkReport {
    pub path: String,
    pub changed: bool,
    pub written: bool,
    pub backup: Option<String>,
    pub links: Vec<JsSubstitution>,
    pub excluded: Vec<JsExclusion>,
    pub content: Option<String>,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsLinkerOptions {
    pub roots: Option<Vec<String>>,
    pub word_boundaries: Option<bool>,
    pub backup_suffix: Option<String>,
}

fn to_js_substitution(s: Substitution) -> JsSubstitution {
    JsSubstitution {
        owner: s.owner,
        text: s.text,
        markup: s.markup,
    }
}

fn to_js_entry(e: &AliasEntry) -> JsAliasEntry {
    JsAliasEntry {
        owner: e.owner.clone(),
        text: e.text.clone(),
    }
}

fn to_index(entries: Vec<JsAliasEntry>) -> AliasIndex {
    AliasIndex::from_entries(
        entries
            .into_iter()
            .map(|e| AliasEntry::new(e.owner, e.text))
            .collect(),
    )
}

fn to_js_report(report: LinkReport) -> JsLinkReport {
    JsLinkReport {
        path: report.path.to_string_lossy().to_string(),
        changed: report.changed,
        written: report.written,
        backup: report.backup.map(|p| p.to_string_lossy().to_string()),
        links: report.links.into_iter().map(to_js_substitution).collect(),
        excluded: report
            .excluded
            .into_iter()
            .map(|e| JsExclusion {
                path: e.path.to_string_lossy().to_string(),
                reason: e.reason,
            })
            .collect(),
        content: report.content,
    }
}

// ============================================================================
// Linker Class
// ============================================================================

#[napi]
pub struct JsLinker {
    vault: Vault,
    config: Config,
}

#[napi]
impl JsLinker {
    /// Open a vault at the specified path.
    #[napi(constructor)]
    pub fn new(path: String, options: Option<JsLinkerOptions>) -> Result<Self> {
        let vault =
            Vault::new(PathBuf::from(path)).map_err(|e| Error::from_reason(e.to_string()))?;

        let mut config = Config::default();
        if let Some(options) = options {
            if let Some(roots) = options.roots {
                config.roots = roots;
            }
            if let Some(word_boundaries) = options.word_boundaries {
                config.word_boundaries = word_boundaries;
            }
            if let Some(suffix) = options.backup_suffix {
                config.backup_suffix = suffix;
            }
        }
        let config = config
            .validated()
            .map_err(|e| Error::from_reason(e.to_string()))?;

        Ok(Self { vault, config })
    }

    /// Get the vault root path.
    #[napi(getter)]
    pub fn root(&self) -> String {
        self.vault.root.to_string_lossy().to_string()
    }

    /// Configured roots that do not exist in the vault.
    #[napi]
    pub fn missing_roots(&self) -> Vec<String> {
        self.config.missing_roots(&self.vault)
    }

    /// Build the alias index from the current corpus.
    #[napi]
    pub fn build_index(&self) -> Result<Vec<JsAliasEntry>> {
        let (index, _) = Linker::new(&self.vault, &self.config)
            .build_index()
            .map_err(|e| Error::from_reason(e.to_string()))?;
        Ok(index.iter().map(to_js_entry).collect())
    }

    /// Link names and aliases in one note.
    #[napi]
    pub fn link_note(&self, path: String, dry_run: Option<bool>) -> Result<JsLinkReport> {
        let note_path = self
            .vault
            .resolve_note(&path)
            .map_err(|e| Error::from_reason(e.to_string()))?;

        Linker::new(&self.vault, &self.config)
            .link_note(&note_path, dry_run.unwrap_or(false))
            .map(to_js_report)
            .map_err(|e| Error::from_reason(e.to_string()))
    }
}

// ============================================================================
// Standalone Functions
// ============================================================================

/// Extract the alternate names declared in raw note text.
#[napi]
pub fn extract_aliases(content: String) -> Vec<String> {
    aliaslink::extract_aliases(&content)
}

/// Build an ordered alias index from entities in scan order.
#[napi]
pub fn build_index(entities: Vec<JsEntityAliases>) -> Vec<JsAliasEntry> {
    let entities: Vec<EntityAliases> = entities
        .into_iter()
        .map(|e| EntityAliases::new(e.id, e.aliases))
        .collect();
    aliaslink::build_index(&entities)
        .iter()
        .map(to_js_entry)
        .collect()
}

/// Split raw text into its header block and body.
#[napi]
pub fn split_header(content: String) -> JsDocument {
    let doc = aliaslink::split_header(&content);
    JsDocument {
        header: doc.header.to_string(),
        body: doc.body.to_string(),
    }
}

/// Rewrite a body against an index produced by `buildIndex`.
#[napi]
pub fn rewrite_body(
    body: String,
    index: Vec<JsAliasEntry>,
    word_boundaries: Option<bool>,
) -> JsRewrite {
    let options = RewriteOptions {
        word_boundaries: word_boundaries.unwrap_or(false),
    };
    let rewrite = aliaslink::rewrite_body_with(&body, &to_index(index), &options);
    JsRewrite {
        body: rewrite.body,
        substitutions: rewrite
            .substitutions
            .into_iter()
            .map(to_js_substitution)
            .collect(),
    }
}
