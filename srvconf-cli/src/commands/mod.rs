//! Command implementations for the srvconf CLI.
//!
//! Each submodule implements one subcommand. The settings commands share
//! one shape: check capabilities, load configuration, open the store,
//! run the facade operation, and render the outcome.

pub mod apply;
pub mod completions;
pub mod get_base_url;
pub mod get_port;
pub mod init;
pub mod set_base_url;
pub mod set_port;
pub mod set_server_settings;
pub mod show;
pub mod validate;

pub use apply::ApplyCommand;
pub use completions::CompletionsCommand;
pub use get_base_url::GetBaseUrlCommand;
pub use get_port::GetPortCommand;
pub use init::InitCommand;
pub use set_base_url::SetBaseUrlCommand;
pub use set_port::SetPortCommand;
pub use set_server_settings::SetServerSettingsCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;

use srvconf::{Applied, Port};

/// Log what an accepted update changed.
pub(crate) fn log_applied(applied: &Applied) {
    match applied {
        Applied::BaseUrl(url) => log::info!("Set baseUrl to [{url}]."),
        Applied::Port(port) => log_port(*port),
        Applied::Settings(settings) => {
            if let Some(url) = &settings.base_url {
                log::info!("Set baseUrl to [{url}].");
            }
            log_port(settings.port);
        }
    }
}

pub(crate) fn log_port(port: Port) {
    log::info!("Set port to [{port}].");
    log::warn!("The new port takes effect after the service restarts.");
}
