//! Build script for srvconf-cli.
//!
//! Renders the `srvconf.1` man page into `OUT_DIR/man` with clap_mangen.
//! Build scripts cannot depend on the crate being built, so the command
//! tree is declared here again; keep it in step with src/cli.rs.

use std::fs;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;

fn build_cli() -> Command {
    Command::new("srvconf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("View and update server settings")
        .long_about("Command-line tool for viewing and updating a service's base URL and port")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("SRVCONF_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the database busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("SRVCONF_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("accept")
                .long("accept")
                .help("Preferred response format, e.g. text/plain or application/json")
                .value_name("MEDIA_TYPE")
                .global(true)
                .env("SRVCONF_ACCEPT"),
        )
        .arg(
            Arg::new("grant")
                .long("grant")
                .help("Capability held by the caller (repeatable or comma-separated)")
                .value_name("CAPABILITY")
                .global(true)
                .value_delimiter(',')
                .action(ArgAction::Append)
                .env("SRVCONF_GRANTS"),
        )
        .subcommands(vec![
            Command::new("get-base-url").about("Print the base URL of the service"),
            Command::new("set-base-url").about("Update the base URL of the service"),
            Command::new("get-port").about("Print the port of the service"),
            Command::new("set-port")
                .about("Update the port of the service")
                .long_about("Update the port of the service; takes effect after a restart"),
            Command::new("set-server-settings")
                .about("Update the base URL and port together")
                .long_about("Validate both values and store them together, or store neither"),
            Command::new("apply")
                .about("Apply a JSON server settings body")
                .long_about("Apply a body such as {\"baseUrl\": \"...\", \"port\": 8080}"),
            Command::new("show").about("Print both settings"),
            Command::new("init")
                .about("Initialize the data directory and database")
                .long_about("Set up the settings database and, optionally, a configuration file"),
            Command::new("validate").about("Validate a configuration file"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer).unwrap();
    fs::write(man_dir.join("srvconf.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
