//! Shared test utilities for database unit tests.

use tempfile::{tempdir, TempDir};

use crate::database::{Database, DatabaseConfig};

/// Creates a test database in a fresh temporary directory.
///
/// The directory is returned alongside the database and is removed when
/// dropped, so keep it alive for as long as the database is used.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> (TempDir, Database) {
    let dir = tempdir().unwrap();
    let config = DatabaseConfig::new(dir.path().join("settings.db"));
    let db = Database::open(config).unwrap();
    (dir, db)
}
