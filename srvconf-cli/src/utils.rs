//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, capability checks, opening the settings
//! store, and writing rendered responses.

use std::path::PathBuf;
use std::time::Duration;

use srvconf::database::default_data_dir;
use srvconf::output::{render, Format, IntoResponseBody};
use srvconf::{
    Capability, Config, ConfigBuilder, ConfigurationFacade, Database, DatabaseConfig, Grants,
    Operation, Outcome, SettingsStore,
};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the database busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Preferred response format.
    pub accept: Option<String>,

    /// Capabilities held by the caller; `None` grants all of them.
    pub grants: Option<Vec<String>>,
}

/// How a command uses the settings database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Reads only; a missing database means nothing was stored yet.
    ReadOnly,
    /// Reads and writes; the database is created if needed.
    ReadWrite,
}

/// Resolve the data directory: `--data-dir`, `SRVCONF_DATA_DIR`, or `~/.srvconf`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match &global.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => default_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load layered configuration from the data directory and environment.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    ConfigBuilder::new()
        .with_data_dir(resolve_data_dir(global)?)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// The capabilities granted to this invocation.
pub fn grants(global: &GlobalOptions) -> Result<Grants, CliError> {
    let Some(names) = &global.grants else {
        return Ok(Grants::all());
    };

    names
        .iter()
        .filter(|name| !name.trim().is_empty())
        .map(|name| {
            name.parse::<Capability>()
                .map_err(|e| CliError::InvalidArguments(e.to_string()))
        })
        .collect()
}

/// Refuse `operation` unless every capability it requires was granted.
pub fn authorize(global: &GlobalOptions, operation: Operation) -> Result<(), CliError> {
    let grants = grants(global)?;
    if grants.permits(operation) {
        return Ok(());
    }

    Err(CliError::Forbidden {
        operation,
        missing: grants.missing(operation),
    })
}

/// The response format: `--accept`, then the configured preference.
pub fn response_format(global: &GlobalOptions, config: &Config) -> Format {
    Format::from_preference(global.accept.as_deref().unwrap_or(config.accept()))
}

/// Open the settings store behind a facade.
///
/// Settings never stored fall back to the configured defaults.
pub fn open_facade(
    global: &GlobalOptions,
    config: &Config,
    access: Access,
) -> Result<ConfigurationFacade, CliError> {
    let busy_timeout = global
        .busy_timeout
        .map_or_else(|| config.busy_timeout(), |s| Duration::from_secs(s.into()));
    let mut db_config =
        DatabaseConfig::in_data_dir(resolve_data_dir(global)?).with_busy_timeout(busy_timeout);
    let defaults = config.initial_settings();

    if access == Access::ReadOnly {
        if !db_config.path.exists() {
            log::debug!(
                "No settings database at {}, using defaults",
                db_config.path.display()
            );
            return Ok(ConfigurationFacade::new(SettingsStore::in_memory_with(
                defaults,
            )));
        }
        db_config = db_config.read_only();
    }

    let db = Database::open(db_config)?;
    let store = SettingsStore::open(Box::new(db), defaults)?;
    Ok(ConfigurationFacade::new(store))
}

/// Render `outcome` and write it: stdout on success, stderr on failure.
pub fn emit<T: IntoResponseBody>(outcome: Outcome<T>, format: Format) -> Result<T, CliError> {
    let response = render(&outcome, format);

    match outcome {
        Ok(value) => {
            println!("{}", response.body());
            Ok(value)
        }
        Err(failure) => {
            eprintln!("{}", response.body());
            log::error!("{}", failure.cause());
            Err(CliError::Rejected(failure))
        }
    }
}

/// Prepare a command: check capabilities, then load configuration.
pub fn prepare(global: &GlobalOptions, operation: Operation) -> Result<(Config, Format), CliError> {
    authorize(global, operation)?;
    let config = load_configuration(global)?;
    let format = response_format(global, &config);
    Ok((config, format))
}
