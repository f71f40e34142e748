//! Index and conflicts commands.

use crate::cli::args::IndexArgs;
use crate::cli::output::Output;
use crate::config::Config;
use crate::corpus::Exclusion;
use crate::error::Result;
use crate::index::AliasConflict;
use crate::linker::Linker;
use crate::types::AliasEntry;
use crate::vault::Vault;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub total: usize,
    pub entries: Vec<AliasEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excluded: Vec<Exclusion>,
}

#[derive(Debug, Serialize)]
pub struct ConflictsResponse {
    pub total: usize,
    pub conflicts: Vec<AliasConflict>,
}

pub fn index(vault: &Vault, config: &Config, args: &IndexArgs, output: &Output) -> Result<()> {
    let (index, excluded) = Linker::new(vault, config).build_index()?;

    let limit = args.limit.unwrap_or(usize::MAX);
    let response = IndexResponse {
        total: index.len(),
        entries: index.iter().take(limit).cloned().collect(),
        excluded,
    };
    output.print(&response)
}

pub fn conflicts(vault: &Vault, config: &Config, output: &Output) -> Result<()> {
    let (index, _) = Linker::new(vault, config).build_index()?;

    let conflicts = index.conflicts();
    let response = ConflictsResponse {
        total: conflicts.len(),
        conflicts,
    };
    output.print(&response)
}
