//! Link command implementation.

use crate::cli::args::LinkArgs;
use crate::cli::output::Output;
use crate::config::Config;
use crate::error::Result;
use crate::linker::Linker;
use crate::vault::Vault;

pub fn run(vault: &Vault, config: &Config, args: &LinkArgs, output: &Output) -> Result<()> {
    let path = vault.resolve_note(&args.path)?;

    let linker = Linker::new(vault, config);
    let report = linker.link_note(&path, args.dry_run)?;

    output.print(&report)
}
