//! Listening port type.
//!
//! This module provides the validated port number the service binds to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A valid network port number (1-65535).
///
/// Port 0 is considered invalid as it has special meaning in networking contexts.
///
/// # Examples
///
/// ```
/// use srvconf::Port;
///
/// // Valid port
/// let port = Port::try_from(8080u16).unwrap();
/// assert_eq!(port.value(), 8080);
///
/// // Invalid ports
/// assert!(Port::try_from(0u16).is_err());
/// assert!(Port::try_from(70_000i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Port(u16);

impl Port {
    /// The minimum valid port number.
    pub const MIN: u16 = 1;

    /// The maximum valid port number.
    pub const MAX: u16 = 65535;

    /// The port used until one is configured.
    pub const DEFAULT: Self = Self(48080);

    /// Returns the underlying port number.
    ///
    /// # Examples
    ///
    /// ```
    /// use srvconf::Port;
    ///
    /// let port = Port::try_from(8080u16).unwrap();
    /// assert_eq!(port.value(), 8080);
    /// ```
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl Default for Port {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u16> for Port {
    type Error = InvalidPortError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<i64> for Port {
    type Error = InvalidPortError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u16::try_from(value) {
            Ok(port) if port >= Self::MIN => Ok(Self(port)),
            _ => Err(InvalidPortError {
                value,
                reason: format!("port must be between {} and {}", Self::MIN, Self::MAX),
            }),
        }
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for invalid port numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPortError {
    /// The invalid port value.
    pub value: i64,
    /// The reason the port is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidPortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid port {}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidPortError {}
