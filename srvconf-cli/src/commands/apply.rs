//! Apply command implementation.
//!
//! Reads a JSON request body and applies it. `{"baseUrl": "..."}` and
//! `{"port": 8080}` update one setting; any other body is a combined
//! update that needs both fields.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Args;
use srvconf::facade::SETTINGS_NOT_UPDATED;
use srvconf::request::MutationRequest;
use srvconf::{Failure, Operation};

use crate::commands::log_applied;
use crate::error::CliError;
use crate::utils::{emit, open_facade, prepare, Access, GlobalOptions};

/// Apply a JSON settings body.
#[derive(Args)]
pub struct ApplyCommand {
    /// Request body as inline JSON
    #[arg(long, value_name = "JSON", conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the request body from a file (`-` for stdin)
    #[arg(long, value_name = "PATH")]
    pub body_file: Option<PathBuf>,
}

impl ApplyCommand {
    fn read_body(&self) -> Result<String, CliError> {
        if let Some(body) = &self.body {
            return Ok(body.clone());
        }

        match &self.body_file {
            Some(path) if path.as_os_str() == "-" => {
                let mut body = String::new();
                io::stdin().read_to_string(&mut body)?;
                Ok(body)
            }
            Some(path) => Ok(fs::read_to_string(path)?),
            None => Err(CliError::InvalidArguments(
                "one of --body or --body-file is required".to_string(),
            )),
        }
    }

    /// Execute the apply command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let body = self.read_body()?;
        let request = MutationRequest::from_json(&body);

        // A malformed body is checked as the combined form
        let operation = request
            .as_ref()
            .map_or(Operation::SetServerSettings, MutationRequest::operation);
        let (config, format) = prepare(global, operation)?;

        let outcome = match request {
            Ok(request) => open_facade(global, &config, Access::ReadWrite)?.apply(request),
            Err(e) => Err(Failure::new(SETTINGS_NOT_UPDATED, e)),
        };

        let confirmation = emit(outcome, format)?;
        log_applied(&confirmation.applied);
        Ok(())
    }
}
