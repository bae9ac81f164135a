//! Configuration schema definitions.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Port, ServerSettings};

/// Built-in busy timeout for the settings database, in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// Built-in format preference.
pub const DEFAULT_ACCEPT: &str = "text/plain";

/// Complete configuration structure.
///
/// Every field is optional so that partial files and overrides can be
/// layered; [`Config::defaults`] fills in the built-in values.
///
/// # Examples
///
/// ```
/// use srvconf::config::{Config, SettingsConfig};
///
/// let config: Config = serde_yaml::from_str("settings:\n  default_port: 9000\n").unwrap();
/// assert_eq!(
///     config.settings,
///     Some(SettingsConfig { default_port: Some(9000) })
/// );
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Initial values for settings that were never stored.
    pub settings: Option<SettingsConfig>,

    /// Settings database tuning.
    pub database: Option<DatabaseTuning>,

    /// Response rendering.
    pub output: Option<OutputConfig>,
}

/// Initial values for the server settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SettingsConfig {
    /// Port reported before one is ever set.
    pub default_port: Option<u16>,
}

/// Settings database tuning.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DatabaseTuning {
    /// How long to wait on a locked database, in milliseconds.
    pub busy_timeout_ms: Option<u64>,
}

/// Response rendering.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Format preference used when the caller states none.
    pub accept: Option<String>,
}

impl Config {
    /// The built-in configuration.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            settings: Some(SettingsConfig {
                default_port: Some(Port::DEFAULT.value()),
            }),
            database: Some(DatabaseTuning {
                busy_timeout_ms: Some(DEFAULT_BUSY_TIMEOUT_MS),
            }),
            output: Some(OutputConfig {
                accept: Some(DEFAULT_ACCEPT.to_string()),
            }),
        }
    }

    /// The configured default port, if any.
    #[must_use]
    pub fn default_port(&self) -> Option<u16> {
        self.settings.as_ref().and_then(|s| s.default_port)
    }

    /// The configured busy timeout, falling back to the built-in one.
    #[must_use]
    pub fn busy_timeout(&self) -> Duration {
        let millis = self
            .database
            .as_ref()
            .and_then(|d| d.busy_timeout_ms)
            .unwrap_or(DEFAULT_BUSY_TIMEOUT_MS);
        Duration::from_millis(millis)
    }

    /// The configured format preference, falling back to the built-in one.
    #[must_use]
    pub fn accept(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.accept.as_deref())
            .unwrap_or(DEFAULT_ACCEPT)
    }

    /// Settings to start from when nothing was stored yet.
    ///
    /// An invalid configured port falls back to [`Port::DEFAULT`];
    /// [`ConfigValidator`](super::ConfigValidator) reports it beforehand.
    #[must_use]
    pub fn initial_settings(&self) -> ServerSettings {
        let port = self
            .default_port()
            .and_then(|p| Port::try_from(p).ok())
            .unwrap_or(Port::DEFAULT);
        ServerSettings::with_port(port)
    }
}
