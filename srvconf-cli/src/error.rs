//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use std::fmt;

use srvconf::{Capability, Error as LibError, ErrorKind, Failure, Operation};

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// A facade operation failed. Its rendered body was already written.
    Rejected(Failure),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),

    /// The caller lacks a capability the operation requires.
    Forbidden {
        /// The refused operation.
        operation: Operation,
        /// Capabilities that were required but not granted.
        missing: Vec<Capability>,
    },
}

const fn kind_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::InvalidInput => 1,
        ErrorKind::NotFound => 2,
        ErrorKind::StoreFault => 3,
    }
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Invalid input
    /// - 2: Value not found
    /// - 3: Settings store fault
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 7: Configuration error
    /// - 8: Missing capability
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(e) => kind_exit_code(e.kind()),
            CliError::Rejected(failure) => kind_exit_code(failure.kind()),
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
            CliError::Forbidden { .. } => 8,
        }
    }

    /// Whether the error was already reported to the user.
    pub fn is_reported(&self) -> bool {
        matches!(self, CliError::Rejected(_))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Rejected(failure) => write!(f, "{failure}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::Forbidden { operation, missing } => {
                let names: Vec<&str> = missing.iter().map(|c| c.as_str()).collect();
                write!(
                    f,
                    "Not permitted to run {operation:?}: missing capability {}",
                    names.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Rejected(failure) => Some(failure),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<clap::Error> for CliError {
    fn from(e: clap::Error) -> Self {
        CliError::InvalidArguments(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let not_found = LibError::NotFound {
            resource: "baseUrl".into(),
        };
        assert_eq!(CliError::from(not_found).exit_code(), 2);

        let corrupt = LibError::Corruption {
            details: "x".into(),
        };
        assert_eq!(CliError::from(corrupt).exit_code(), 3);

        let invalid = Failure::new(
            "Could not update the port of the service.",
            LibError::InvalidPort {
                value: 0,
                reason: "out of range".into(),
            },
        );
        let err = CliError::Rejected(invalid);
        assert_eq!(err.exit_code(), 1);
        assert!(err.is_reported());

        assert_eq!(CliError::InvalidArguments(String::new()).exit_code(), 4);
        assert_eq!(
            CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, "x")).exit_code(),
            5
        );
        assert_eq!(CliError::Config(String::new()).exit_code(), 7);
    }

    #[test]
    fn test_forbidden_message_names_capabilities() {
        let err = CliError::Forbidden {
            operation: Operation::SetServerSettings,
            missing: vec![Capability::SetPort],
        };
        assert_eq!(err.exit_code(), 8);
        assert!(err.to_string().contains("CONFIGURATION_SET_PORT"));
        assert!(!err.is_reported());
    }
}
