//! Builder for assembling the effective configuration.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Assembles configuration from its layers.
///
/// Layers apply in order: built-in defaults, then `config.yaml` in the data
/// directory, then `SRVCONF_*` environment variables, then programmatic
/// overrides. The result is validated before it is returned.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads every layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `config.yaml` from `dir` instead of the default data directory.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Do not read the configuration file.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not read environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Add a programmatic layer on top of everything else.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Build and validate the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed,
    /// an environment variable is malformed, or the result is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use srvconf::config::{Config, ConfigBuilder, OutputConfig};
    ///
    /// let config = ConfigBuilder::new()
    ///     .skip_files()
    ///     .skip_env()
    ///     .with_config(Config {
    ///         output: Some(OutputConfig { accept: Some("json".into()) }),
    ///         ..Default::default()
    ///     })
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(config.accept(), "json");
    /// assert_eq!(config.default_port(), Some(48080));
    /// ```
    pub fn build(self) -> Result<Config> {
        let mut config = Config::defaults();

        if !self.skip_files {
            if let Some(source) = ConfigLoader::load_user_config(self.data_dir.as_deref())? {
                ConfigMerger::merge_into(&mut config, &source.config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for layer in &self.overrides {
            ConfigMerger::merge_into(&mut config, layer);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::DEFAULT_PORT_ENV;
    use crate::config::schema::SettingsConfig;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn port_layer(port: u16) -> Config {
        Config {
            settings: Some(SettingsConfig {
                default_port: Some(port),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::defaults());
    }

    #[test]
    #[serial]
    fn test_layer_precedence() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.yaml"),
            "settings:\n  default_port: 1111\ndatabase:\n  busy_timeout_ms: 42\n",
        )
        .unwrap();

        std::env::remove_var(DEFAULT_PORT_ENV);
        let from_file = ConfigBuilder::new()
            .with_data_dir(dir.path())
            .build()
            .unwrap();
        assert_eq!(from_file.default_port(), Some(1111));
        assert_eq!(from_file.busy_timeout().as_millis(), 42);

        std::env::set_var(DEFAULT_PORT_ENV, "2222");
        let from_env = ConfigBuilder::new().with_data_dir(dir.path()).build();
        let programmatic = ConfigBuilder::new()
            .with_data_dir(dir.path())
            .with_config(port_layer(3333))
            .build();
        std::env::remove_var(DEFAULT_PORT_ENV);

        let from_env = from_env.unwrap();
        assert_eq!(from_env.default_port(), Some(2222));
        assert_eq!(from_env.busy_timeout().as_millis(), 42);
        assert_eq!(programmatic.unwrap().default_port(), Some(3333));
    }

    #[test]
    fn test_invalid_result_rejected() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(port_layer(0))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_file_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.yaml"), "unknown_key: 1\n").unwrap();
        let result = ConfigBuilder::new()
            .with_data_dir(dir.path())
            .skip_env()
            .build();
        assert!(result.is_err());
    }
}
