//! Aliases command implementation.

use crate::cli::args::AliasesArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::vault::Vault;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AliasesResponse {
    pub path: String,
    pub id: String,
    pub aliases: Vec<String>,
}

pub fn run(vault: &Vault, args: &AliasesArgs, output: &Output) -> Result<()> {
    let path = vault.resolve_note(&args.path)?;
    let note = vault.load_note(&path)?;

    let response = AliasesResponse {
        path: path.to_string_lossy().to_string(),
        id: note.id().to_string(),
        aliases: note.aliases(),
    };
    output.print(&response)
}
