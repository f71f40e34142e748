//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aliaslink")]
#[command(author, version, about = "Link note names and aliases to wikilinks", long_about = None)]
pub struct Cli {
    /// Path to the vault (overrides config default)
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,

    /// Path to a config file (defaults to the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Root folder whose notes feed the alias index (repeatable, overrides config)
    #[arg(long = "root", global = true)]
    pub roots: Vec<String>,

    /// Only link whole-word occurrences
    #[arg(long, global = true)]
    pub word_boundaries: bool,

    /// Output as JSON (default)
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            OutputFormat::Json
        }
    }

    /// Default log filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Link names and aliases found in a note
    Link(LinkArgs),

    /// Show the aliases declared in a note
    Aliases(AliasesArgs),

    /// Show the ordered alias index for the corpus
    Index(IndexArgs),

    /// Show aliases claimed by more than one note
    Conflicts,

    /// Check that every configured root exists
    #[command(name = "check-roots")]
    CheckRoots,
}

// === Link ===

#[derive(Parser, Debug)]
pub struct LinkArgs {
    /// Note to rewrite (path, path without .md, or note name)
    pub path: String,

    /// Show the rewritten content without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

// === Aliases ===

#[derive(Parser, Debug)]
pub struct AliasesArgs {
    /// Note to read (path, path without .md, or note name)
    pub path: String,
}

// === Index ===

#[derive(Parser, Debug)]
pub struct IndexArgs {
    /// Limit number of entries shown
    #[arg(long)]
    pub limit: Option<usize>,
}
