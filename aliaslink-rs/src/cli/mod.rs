//! CLI command implementations.

pub mod args;
pub mod output;

pub mod aliases;
pub mod index;
pub mod link;
pub mod roots;

pub use args::{Cli, Commands};
pub use output::Output;
