//! Root validation command.

use crate::cli::output::Output;
use crate::config::Config;
use crate::error::Result;
use crate::vault::Vault;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RootStatus {
    pub root: String,
    pub exists: bool,
}

#[derive(Debug, Serialize)]
pub struct CheckRootsResponse {
    pub roots: Vec<RootStatus>,
    pub missing: usize,
}

/// Report every configured root, then fail if any is missing.
pub fn check_roots(vault: &Vault, config: &Config, output: &Output) -> Result<()> {
    let missing = config.missing_roots(vault);

    let roots: Vec<RootStatus> = config
        .roots
        .iter()
        .map(|root| RootStatus {
            root: root.clone(),
            exists: !missing.contains(root),
        })
        .collect();

    if config.roots.is_empty() {
        output.info("No roots configured: the whole vault is indexed");
    }

    output.print(&CheckRootsResponse {
        roots,
        missing: missing.len(),
    })?;

    config.validate_roots(vault)
}
