//! Common test utilities for integration tests.

use std::path::Path;

use srvconf::database::{Database, DatabaseConfig};
use srvconf::{ConfigurationFacade, ServerSettings, SettingsStore};
use tempfile::TempDir;

/// Creates a temporary directory that is removed when dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Opens the settings database in `dir`.
#[allow(dead_code)]
pub fn open_database(dir: &Path) -> Database {
    Database::open(DatabaseConfig::new(dir.join("settings.db"))).unwrap()
}

/// Opens a facade over the settings database in `dir`, starting from
/// default settings if nothing was stored yet.
#[allow(dead_code)]
pub fn open_facade(dir: &Path) -> ConfigurationFacade {
    let store = SettingsStore::open(Box::new(open_database(dir)), ServerSettings::default()).unwrap();
    ConfigurationFacade::new(store)
}
