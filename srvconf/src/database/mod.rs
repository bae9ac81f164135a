//! SQLite storage for the server settings.
//!
//! This module provides a persistent [`SettingsBackend`](crate::SettingsBackend)
//! so that settings survive process restarts. It handles connection
//! management, schema versioning, and reading and writing the single
//! settings row.
//!
//! # Examples
//!
//! ```no_run
//! use srvconf::database::{Database, DatabaseConfig};
//! use srvconf::{ServerSettings, SettingsStore};
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/srvconf/settings.db")).unwrap();
//! let store = SettingsStore::open(Box::new(db), ServerSettings::default()).unwrap();
//! println!("port: {}", store.port());
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;

#[cfg(test)]
mod test_util;

// Re-export public API
pub use config::{default_data_dir, DatabaseConfig, DATABASE_FILE_NAME};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
