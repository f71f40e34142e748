//! aliaslink CLI entry point.

use aliaslink::cli::args::{Cli, Commands};
use aliaslink::cli::output::Output;
use aliaslink::cli::{aliases, index, link, roots};
use aliaslink::config::Config;
use aliaslink::error::{exit_code, LinkError};
use aliaslink::vault::Vault;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `-v`/`-q`.
fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("aliaslink={}", cli.log_level())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), LinkError> {
    // Load config, then apply command-line overrides
    let config = match cli.config {
        Some(ref path) => Config::from_path(path)?,
        None => Config::load()?,
    }
    .with_roots(&cli.roots)
    .with_word_boundaries(cli.word_boundaries);

    let vault_path = config.resolve_vault_path(cli.vault.as_deref())?;
    let vault = Vault::new(vault_path)?;

    let output = Output::new(cli.output_format(), cli.quiet);

    match &cli.command {
        Commands::Link(args) => link::run(&vault, &config, args, &output),
        Commands::Aliases(args) => aliases::run(&vault, args, &output),
        Commands::Index(args) => index::index(&vault, &config, args, &output),
        Commands::Conflicts => index::conflicts(&vault, &config, &output),
        Commands::CheckRoots => roots::check_roots(&vault, &config, &output),
    }
}
