//! Library interface for the srvconf CLI.
//!
//! Exposes the command-line structure so the binary, completion
//! generation, and tests share one definition.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::{Cli, Command};
pub use error::CliError;
pub use utils::GlobalOptions;
