//! Get-port command implementation.

use clap::Args;
use srvconf::Operation;

use crate::error::CliError;
use crate::utils::{emit, open_facade, prepare, Access, GlobalOptions};

/// Print the port of the service.
#[derive(Args)]
pub struct GetPortCommand {}

impl GetPortCommand {
    /// Execute the get-port command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, format) = prepare(global, Operation::GetPort)?;
        let facade = open_facade(global, &config, Access::ReadOnly)?;
        emit(facade.get_port(), format)?;
        Ok(())
    }
}
