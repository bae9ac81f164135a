//! Error types for the srvconf library.
//!
//! This module provides the error hierarchy for every operation in the
//! library, using `thiserror` for ergonomic error handling. Each error maps
//! onto one of three [`ErrorKind`]s, which is all the facade and renderer
//! ever branch on.

use std::fmt;

use thiserror::Error;

/// Result type alias for operations that may fail with a srvconf error.
///
/// # Examples
///
/// ```
/// use srvconf::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(8080)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The coarse classification of a failure.
///
/// This is the taxonomy surfaced to callers: the transport layer maps
/// it to a status and never needs to look at the concrete [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A candidate value failed validation.
    InvalidInput,
    /// The queried value has never been set.
    NotFound,
    /// The backing store rejected an otherwise valid operation.
    StoreFault,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "invalid input"),
            Self::NotFound => write!(f, "not found"),
            Self::StoreFault => write!(f, "store fault"),
        }
    }
}

/// The main error type for the srvconf library.
#[derive(Debug, Error)]
pub enum Error {
    /// A port candidate was outside `[1, 65535]`.
    #[error("invalid port {value}: {reason}")]
    InvalidPort {
        /// The rejected candidate.
        value: i64,
        /// The reason the port is invalid.
        reason: String,
    },

    /// A base URL candidate was not a well-formed absolute URL.
    #[error("invalid base URL '{value}': {reason}")]
    InvalidBaseUrl {
        /// The rejected candidate.
        value: String,
        /// The reason the URL is invalid.
        reason: String,
    },

    /// A required field was absent from a request.
    #[error("missing required field '{field}'")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// A request body could not be parsed.
    #[error("malformed request body: {0}")]
    RequestBody(#[from] serde_json::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested value has not been defined.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted settings violate the settings invariants.
    #[error("stored settings are corrupt: {details}")]
    Corruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl Error {
    /// Classify this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use srvconf::{Error, ErrorKind};
    ///
    /// let err = Error::InvalidPort { value: 0, reason: "out of range".into() };
    /// assert_eq!(err.kind(), ErrorKind::InvalidInput);
    ///
    /// let err = Error::NotFound { resource: "baseUrl".into() };
    /// assert_eq!(err.kind(), ErrorKind::NotFound);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPort { .. }
            | Self::InvalidBaseUrl { .. }
            | Self::MissingField { .. }
            | Self::RequestBody(_)
            | Self::Validation { .. }
            | Self::Configuration(_) => ErrorKind::InvalidInput,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Database(_)
            | Self::Io(_)
            | Self::Corruption { .. }
            | Self::UnsupportedSchemaVersion { .. } => ErrorKind::StoreFault,
        }
    }

    /// The request field an input error refers to, if any.
    ///
    /// Field names use the wire spelling (`baseUrl`, `port`).
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidPort { .. } => Some("port"),
            Self::InvalidBaseUrl { .. } => Some("baseUrl"),
            Self::MissingField { field } | Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

// Additional conversions for better ergonomics

impl From<crate::port::InvalidPortError> for Error {
    fn from(err: crate::port::InvalidPortError) -> Self {
        Self::InvalidPort {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl From<crate::base_url::InvalidBaseUrlError> for Error {
    fn from(err: crate::base_url::InvalidBaseUrlError) -> Self {
        Self::InvalidBaseUrl {
            value: err.value,
            reason: err.reason,
        }
    }
}
