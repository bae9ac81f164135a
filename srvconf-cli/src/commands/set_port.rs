//! Set-port command implementation.

use clap::Args;
use srvconf::Operation;

use crate::commands::log_port;
use crate::error::CliError;
use crate::utils::{emit, open_facade, prepare, Access, GlobalOptions};

/// Update the port of the service.
#[derive(Args)]
pub struct SetPortCommand {
    /// New port, between 1 and 65535
    #[arg(value_name = "PORT", allow_negative_numbers = true)]
    pub port: i64,
}

impl SetPortCommand {
    /// Execute the set-port command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, format) = prepare(global, Operation::SetPort)?;
        let facade = open_facade(global, &config, Access::ReadWrite)?;

        let confirmation = emit(facade.set_port(self.port), format)?;
        log_port(confirmation.applied);
        Ok(())
    }
}
