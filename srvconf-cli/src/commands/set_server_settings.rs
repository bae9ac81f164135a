//! Set-server-settings command implementation.
//!
//! Both values are validated before either is stored; a rejected base URL
//! or port leaves the stored settings untouched.

use clap::Args;
use srvconf::request::{MutationRequest, ServerSettingsUpdate};
use srvconf::Operation;

use crate::commands::log_applied;
use crate::error::CliError;
use crate::utils::{emit, open_facade, prepare, Access, GlobalOptions};

/// Update the base URL and port together.
#[derive(Args)]
pub struct SetServerSettingsCommand {
    /// New base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// New port
    #[arg(long, value_name = "PORT", allow_negative_numbers = true)]
    pub port: Option<i64>,
}

impl SetServerSettingsCommand {
    /// Execute the set-server-settings command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, format) = prepare(global, Operation::SetServerSettings)?;
        let facade = open_facade(global, &config, Access::ReadWrite)?;

        // Missing flags are reported by the facade, named like body fields.
        let request = MutationRequest::ServerSettings(ServerSettingsUpdate {
            base_url: self.base_url,
            port: self.port,
        });

        let confirmation = emit(facade.apply(request), format)?;
        log_applied(&confirmation.applied);
        Ok(())
    }
}
