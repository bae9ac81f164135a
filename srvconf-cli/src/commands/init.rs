//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the srvconf data directory and database.

use std::path::Path;

use clap::Args;
use srvconf::config::CONFIG_FILE_NAME;
use srvconf::database::DATABASE_FILE_NAME;
use srvconf::init::{init_data_dir, InitOptions};

use crate::error::CliError;
use crate::utils::{resolve_data_dir, GlobalOptions};

/// Initialize the data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Replace an existing database
    #[arg(long)]
    pub overwrite: bool,

    /// Create a default configuration file
    #[arg(long)]
    pub with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    pub dry_run: bool,
}

impl InitCommand {
    fn preview(&self, data_dir: &Path) {
        println!("Dry-run mode: no changes will be made");
        println!();
        println!("Would initialize srvconf in: {}", data_dir.display());

        if data_dir.exists() {
            println!("  - Data directory already exists: {}", data_dir.display());
        } else {
            println!("  - Create data directory: {}", data_dir.display());
        }

        let db_path = data_dir.join(DATABASE_FILE_NAME);
        match (db_path.exists(), self.overwrite) {
            (true, true) => println!("  - Recreate database: {}", db_path.display()),
            (true, false) => println!(
                "  - ERROR: Database already exists (use --overwrite to replace): {}",
                db_path.display()
            ),
            (false, _) => println!("  - Create database: {}", db_path.display()),
        }

        if self.with_config {
            let config_path = data_dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                println!(
                    "  - Configuration file already exists (will not overwrite): {}",
                    config_path.display()
                );
            } else {
                println!("  - Create configuration file: {}", config_path.display());
            }
        }
    }

    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = resolve_data_dir(global)?;

        if self.dry_run {
            self.preview(&data_dir);
            return Ok(());
        }

        let options = InitOptions::new(data_dir)
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config);
        let result = init_data_dir(&options)?;

        println!("Initialized srvconf in: {}", result.data_dir.display());
        if result.data_dir_created {
            println!("  - Created data directory");
        }
        if result.database_created {
            if self.overwrite {
                println!("  - Recreated database");
            } else {
                println!("  - Created database");
            }
        }
        if result.config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }
}
