//! Layering of configuration sources.

use super::schema::Config;

/// Merges configuration layers.
///
/// Values present in a later layer overwrite those of earlier layers;
/// absent values leave earlier ones in place.
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge `source` on top of `target`.
    ///
    /// # Examples
    ///
    /// ```
    /// use srvconf::config::{Config, ConfigMerger, SettingsConfig};
    ///
    /// let mut config = Config::defaults();
    /// let file = Config {
    ///     settings: Some(SettingsConfig { default_port: Some(9000) }),
    ///     ..Default::default()
    /// };
    /// ConfigMerger::merge_into(&mut config, &file);
    /// assert_eq!(config.default_port(), Some(9000));
    /// assert_eq!(config.accept(), "text/plain");
    /// ```
    pub fn merge_into(target: &mut Config, source: &Config) {
        if let Some(settings) = &source.settings {
            let merged = target.settings.get_or_insert_with(Default::default);
            if settings.default_port.is_some() {
                merged.default_port = settings.default_port;
            }
        }

        if let Some(database) = &source.database {
            let merged = target.database.get_or_insert_with(Default::default);
            if database.busy_timeout_ms.is_some() {
                merged.busy_timeout_ms = database.busy_timeout_ms;
            }
        }

        if let Some(output) = &source.output {
            let merged = target.output.get_or_insert_with(Default::default);
            if output.accept.is_some() {
                merged.accept.clone_from(&output.accept);
            }
        }
    }
}
