//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `SRVCONF_*` environment variables that
//! override configuration file values.

use std::env;
use std::str::FromStr;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Overrides `settings.default_port`.
pub const DEFAULT_PORT_ENV: &str = "SRVCONF_DEFAULT_PORT";
/// Overrides `database.busy_timeout_ms`.
pub const BUSY_TIMEOUT_ENV: &str = "SRVCONF_BUSY_TIMEOUT_MS";
/// Overrides `output.accept`.
pub const ACCEPT_ENV: &str = "SRVCONF_ACCEPT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use srvconf::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::defaults();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(port) = env::var(DEFAULT_PORT_ENV) {
            config
                .settings
                .get_or_insert_with(Default::default)
                .default_port = Some(Self::parse_number(DEFAULT_PORT_ENV, &port, "a port number")?);
        }

        if let Ok(millis) = env::var(BUSY_TIMEOUT_ENV) {
            config
                .database
                .get_or_insert_with(Default::default)
                .busy_timeout_ms = Some(Self::parse_number(
                BUSY_TIMEOUT_ENV,
                &millis,
                "a number of milliseconds",
            )?);
        }

        if let Ok(accept) = env::var(ACCEPT_ENV) {
            config.output.get_or_insert_with(Default::default).accept = Some(accept);
        }

        Ok(())
    }

    fn parse_number<T: FromStr>(field: &str, value: &str, expected: &str) -> Result<T> {
        value.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Must be {expected}, got '{value}'"),
        })
    }
}
