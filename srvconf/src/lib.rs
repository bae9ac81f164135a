#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # srvconf
//!
//! A library for validated management of a service's runtime settings: the
//! public base URL it advertises and the port it listens on.
//!
//! ## Core Types
//!
//! - [`ConfigurationFacade`]: the entry point for every read and update
//! - [`SettingsStore`] and [`SettingsBackend`]: the single source of truth
//!   and its persistence
//! - [`SettingsValidator`], [`BaseUrl`] and [`Port`]: candidate validation
//! - [`output::render`]: content-negotiated rendering of outcomes
//! - [`Error`], [`ErrorKind`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use srvconf::output::{render, Format};
//! use srvconf::{ConfigurationFacade, SettingsStore};
//!
//! let facade = ConfigurationFacade::new(SettingsStore::in_memory());
//! facade.set_server_settings("https://example.com", 8080).unwrap();
//!
//! let response = render(&facade.get_port(), Format::Plain);
//! assert_eq!(response.http_status(), 200);
//! assert_eq!(response.body(), "8080");
//! ```

pub mod base_url;
pub mod capability;
pub mod config;
pub mod database;
pub mod error;
pub mod facade;
pub mod init;
pub mod logging;
pub mod output;
pub mod port;
pub mod request;
pub mod settings;
pub mod store;
pub mod validator;

// Re-export key types at crate root for convenience
pub use base_url::BaseUrl;
pub use capability::{Capability, Grants, Operation};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, ErrorKind, Result};
pub use facade::{Applied, Confirmation, ConfigurationFacade, Failure, Outcome};
pub use logging::{init_logger, LogLevel, Logger};
pub use port::Port;
pub use request::MutationRequest;
pub use settings::ServerSettings;
pub use store::{MemoryBackend, SettingsBackend, SettingsChange, SettingsStore};
pub use validator::SettingsValidator;
