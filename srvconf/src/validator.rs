//! Validation of candidate settings values.
//!
//! Validation is kept apart from storage so that every backend reuses the
//! same rules and the facade can check a whole request before touching the
//! store.

use crate::error::Result;
use crate::{BaseUrl, Port};

/// Validates candidate settings values.
///
/// # Examples
///
/// ```
/// use srvconf::SettingsValidator;
///
/// let url = SettingsValidator::validate_base_url("https://example.com").unwrap();
/// assert_eq!(url.as_str(), "https://example.com");
///
/// let port = SettingsValidator::validate_port(8080).unwrap();
/// assert_eq!(port.value(), 8080);
///
/// assert!(SettingsValidator::validate_port(0).is_err());
/// ```
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate a base URL candidate.
    ///
    /// Returns the normalized candidate (surrounding whitespace removed).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`](crate::Error::InvalidBaseUrl) for
    /// empty strings and strings that are not absolute URLs with a scheme
    /// and an authority.
    pub fn validate_base_url(candidate: &str) -> Result<BaseUrl> {
        Ok(BaseUrl::parse(candidate)?)
    }

    /// Validate a port candidate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPort`](crate::Error::InvalidPort) for values
    /// outside `[1, 65535]`.
    pub fn validate_port(candidate: i64) -> Result<Port> {
        Ok(Port::try_from(candidate)?)
    }
}
