//! Set-base-url command implementation.

use clap::Args;
use srvconf::Operation;

use crate::error::CliError;
use crate::utils::{emit, open_facade, prepare, Access, GlobalOptions};

/// Update the base URL of the service.
#[derive(Args)]
pub struct SetBaseUrlCommand {
    /// New base URL, e.g. `https://example.com/app`
    #[arg(value_name = "URL")]
    pub base_url: String,
}

impl SetBaseUrlCommand {
    /// Execute the set-base-url command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, format) = prepare(global, Operation::SetBaseUrl)?;
        let facade = open_facade(global, &config, Access::ReadWrite)?;

        let confirmation = emit(facade.set_base_url(&self.base_url), format)?;
        log::info!("Set baseUrl to [{}].", confirmation.applied);
        Ok(())
    }
}
