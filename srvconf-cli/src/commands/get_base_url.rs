//! Get-base-url command implementation.

use clap::Args;
use srvconf::Operation;

use crate::error::CliError;
use crate::utils::{emit, open_facade, prepare, Access, GlobalOptions};

/// Print the base URL of the service.
#[derive(Args)]
pub struct GetBaseUrlCommand {}

impl GetBaseUrlCommand {
    /// Execute the get-base-url command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, format) = prepare(global, Operation::GetBaseUrl)?;
        let facade = open_facade(global, &config, Access::ReadOnly)?;
        emit(facade.get_base_url(), format)?;
        Ok(())
    }
}
