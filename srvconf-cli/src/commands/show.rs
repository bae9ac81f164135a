//! Show command implementation.

use clap::Args;
use srvconf::Operation;

use crate::error::CliError;
use crate::utils::{emit, open_facade, prepare, Access, GlobalOptions};

/// Print both settings.
#[derive(Args)]
pub struct ShowCommand {}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, format) = prepare(global, Operation::ViewSettings)?;
        let facade = open_facade(global, &config, Access::ReadOnly)?;
        emit(Ok(facade.settings()), format)?;
        Ok(())
    }
}
