//! Command-line interface for srvconf.

use std::process;

use clap::Parser;
use srvconf::init_logger;
use srvconf_cli::cli::{Cli, Command};
use srvconf_cli::error::CliError;
use srvconf_cli::utils::GlobalOptions;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not errors
            if !e.use_stderr() {
                e.exit();
            }
            let _ = e.print();
            process::exit(CliError::from(e).exit_code());
        }
    };

    init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        accept: cli.accept,
        grants: cli.grants,
    };

    let result = match cli.command {
        Command::GetBaseUrl(cmd) => cmd.execute(&global),
        Command::SetBaseUrl(cmd) => cmd.execute(&global),
        Command::GetPort(cmd) => cmd.execute(&global),
        Command::SetPort(cmd) => cmd.execute(&global),
        Command::SetServerSettings(cmd) => cmd.execute(&global),
        Command::Apply(cmd) => cmd.execute(&global),
        Command::Show(cmd) => cmd.execute(&global),
        Command::Init(cmd) => cmd.execute(&global),
        Command::Validate(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    if let Err(e) = result {
        if !e.is_reported() {
            eprintln!("Error: {e}");
        }
        process::exit(e.exit_code());
    }
}
