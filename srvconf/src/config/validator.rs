//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::Port;

/// Longest accepted busy timeout, ten minutes.
pub const MAX_BUSY_TIMEOUT_MS: u64 = 600_000;

/// Validates a merged or single-file configuration.
///
/// # Examples
///
/// ```
/// use srvconf::config::{Config, ConfigValidator};
///
/// assert!(ConfigValidator::validate(&Config::defaults()).is_ok());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate every present value.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value as a validation error.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(port) = config.default_port() {
            Port::try_from(port).map_err(|e| Error::Validation {
                field: "settings.default_port".into(),
                message: e.to_string(),
            })?;
        }

        if let Some(millis) = config.database.as_ref().and_then(|d| d.busy_timeout_ms) {
            Self::validate_busy_timeout(millis)?;
        }

        if let Some(accept) = config.output.as_ref().and_then(|o| o.accept.as_deref()) {
            if accept.trim().is_empty() {
                return Err(Error::Validation {
                    field: "output.accept".into(),
                    message: "cannot be empty".into(),
                });
            }
        }

        Ok(())
    }

    fn validate_busy_timeout(millis: u64) -> Result<()> {
        if millis == 0 || millis > MAX_BUSY_TIMEOUT_MS {
            return Err(Error::Validation {
                field: "database.busy_timeout_ms".into(),
                message: format!("must be between 1 and {MAX_BUSY_TIMEOUT_MS}"),
            });
        }
        Ok(())
    }
}
