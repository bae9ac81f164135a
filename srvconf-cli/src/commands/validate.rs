//! Command to validate a srvconf configuration file.

use std::path::PathBuf;

use clap::Args;
use srvconf::config::{ConfigLoader, ConfigValidator, CONFIG_FILE_NAME};

use crate::error::CliError;
use crate::utils::{resolve_data_dir, GlobalOptions};

/// Validate a configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate (defaults to config.yaml in the data directory)
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = match self.config_path {
            Some(path) => path,
            None => resolve_data_dir(global)?.join(CONFIG_FILE_NAME),
        };

        if !path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let config = ConfigLoader::load_file(&path).map_err(|e| {
            eprintln!("Parse error: {e}");
            CliError::Config("Configuration file is invalid".to_string())
        })?;

        ConfigValidator::validate(&config).map_err(|e| {
            eprintln!("Validation error: {e}");
            CliError::Config("Configuration validation failed".to_string())
        })?;

        println!("Configuration is valid");
        Ok(())
    }
}
