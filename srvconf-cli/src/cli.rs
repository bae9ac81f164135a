//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    ApplyCommand, CompletionsCommand, GetBaseUrlCommand, GetPortCommand, InitCommand,
    SetBaseUrlCommand, SetPortCommand, SetServerSettingsCommand, ShowCommand, ValidateCommand,
};

/// Command-line tool for viewing and updating a service's base URL and port.
#[derive(Parser)]
#[command(name = "srvconf")]
#[command(version, about = "View and update server settings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "SRVCONF_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the database busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "SRVCONF_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Preferred response format, e.g. text/plain or application/json
    #[arg(long, value_name = "MEDIA_TYPE", global = true, env = "SRVCONF_ACCEPT")]
    pub accept: Option<String>,

    /// Capability held by the caller (repeatable or comma-separated; all when absent)
    #[arg(
        long = "grant",
        value_name = "CAPABILITY",
        global = true,
        env = "SRVCONF_GRANTS",
        value_delimiter = ','
    )]
    pub grants: Option<Vec<String>>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the base URL of the service
    GetBaseUrl(GetBaseUrlCommand),

    /// Update the base URL of the service
    SetBaseUrl(SetBaseUrlCommand),

    /// Print the port of the service
    GetPort(GetPortCommand),

    /// Update the port of the service
    SetPort(SetPortCommand),

    /// Update the base URL and port together
    SetServerSettings(SetServerSettingsCommand),

    /// Apply a JSON server settings body
    Apply(ApplyCommand),

    /// Print both settings
    Show(ShowCommand),

    /// Initialize the data directory and database
    Init(InitCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
