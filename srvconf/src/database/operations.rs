//! Reading and writing the settings row.

use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use crate::error::{Error, Result};
use crate::store::{SettingsBackend, SettingsChange};
use crate::{BaseUrl, Port, ServerSettings};

use super::connection::Database;
use super::schema::{SELECT_SETTINGS, UPSERT_SETTINGS};

/// Convert a raw row into settings, treating invariant violations as
/// corruption.
fn settings_from_row(base_url: Option<String>, port: i64) -> Result<ServerSettings> {
    let port = Port::try_from(port).map_err(|e| Error::Corruption {
        details: e.to_string(),
    })?;

    let base_url = base_url
        .map(|raw| BaseUrl::parse(&raw))
        .transpose()
        .map_err(|e| Error::Corruption {
            details: e.to_string(),
        })?;

    Ok(ServerSettings { base_url, port })
}

fn read_row(conn: &Connection) -> Result<Option<ServerSettings>> {
    let row = conn
        .query_row(SELECT_SETTINGS, [], |row| {
            Ok((row.get::<_, Option<String>>(0)?, row.get::<_, i64>(1)?))
        })
        .optional()?;

    row.map(|(base_url, port)| settings_from_row(base_url, port))
        .transpose()
}

impl Database {
    /// Reads the persisted settings.
    ///
    /// Returns `Ok(None)` if settings were never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row violates the
    /// settings invariants.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use srvconf::database::{Database, DatabaseConfig};
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/settings.db")).unwrap();
    /// if let Some(settings) = db.load_settings().unwrap() {
    ///     println!("port {}", settings.port);
    /// }
    /// ```
    pub fn load_settings(&self) -> Result<Option<ServerSettings>> {
        read_row(&self.conn)
    }

    /// Applies `change` to the stored row in one immediate transaction and
    /// returns the settings written.
    ///
    /// The row is re-read after the write lock is taken, so fields other
    /// connections committed in the meantime are preserved. `base` stands
    /// in for the row when none exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started, the stored
    /// row is corrupt, or the write or commit fails.
    pub fn update_settings(
        &mut self,
        change: &SettingsChange,
        base: &ServerSettings,
    ) -> Result<ServerSettings> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut next = read_row(&tx)?.unwrap_or_else(|| base.clone());
        change.apply_to(&mut next);

        tx.execute(
            UPSERT_SETTINGS,
            params![
                next.base_url.as_ref().map(BaseUrl::as_str),
                i64::from(next.port.value())
            ],
        )?;

        tx.commit()?;
        log::debug!("Persisted server settings: {next:?}");
        Ok(next)
    }
}

impl SettingsBackend for Database {
    fn load(&mut self) -> Result<Option<ServerSettings>> {
        self.load_settings()
    }

    fn commit(&mut self, change: &SettingsChange, base: &ServerSettings) -> Result<ServerSettings> {
        self.update_settings(change, base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::create_test_database;
    use crate::database::DatabaseConfig;
    use crate::ErrorKind;

    fn sample() -> ServerSettings {
        ServerSettings {
            base_url: Some(BaseUrl::parse("https://example.com").unwrap()),
            port: Port::try_from(8443u16).unwrap(),
        }
    }

    #[test]
    fn test_fresh_database_has_no_settings() {
        let (_dir, db) = create_test_database();
        assert_eq!(db.load_settings().unwrap(), None);
    }

    fn replace_all(db: &mut Database, settings: &ServerSettings) -> ServerSettings {
        db.update_settings(&SettingsChange::All(settings.clone()), &ServerSettings::default())
            .unwrap()
    }

    #[test]
    fn test_update_and_load() {
        let (_dir, mut db) = create_test_database();
        assert_eq!(replace_all(&mut db, &sample()), sample());
        assert_eq!(db.load_settings().unwrap(), Some(sample()));
    }

    #[test]
    fn test_first_single_field_write_starts_from_base() {
        let (_dir, mut db) = create_test_database();
        let base = ServerSettings::with_port(Port::try_from(7000u16).unwrap());
        let url = BaseUrl::parse("https://example.com").unwrap();

        let stored = db
            .update_settings(&SettingsChange::BaseUrl(url.clone()), &base)
            .unwrap();
        assert_eq!(stored.base_url, Some(url));
        assert_eq!(stored.port.value(), 7000);
    }

    #[test]
    fn test_single_field_write_keeps_stored_fields() {
        let (_dir, mut db) = create_test_database();
        replace_all(&mut db, &sample());

        // A stale base must not overwrite the stored base URL
        let port = Port::try_from(80u16).unwrap();
        let stored = db
            .update_settings(&SettingsChange::Port(port), &ServerSettings::default())
            .unwrap();
        assert_eq!(stored.base_url, sample().base_url);
        assert_eq!(stored.port, port);
        assert_eq!(db.load_settings().unwrap(), Some(stored));

        let rows: i64 = db
            .connection()
            .query_row("SELECT COUNT(*) FROM server_settings", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_settings_survive_reopen() {
        let (dir, mut db) = create_test_database();
        replace_all(&mut db, &sample());
        drop(db);

        let db = Database::open(DatabaseConfig::new(dir.path().join("settings.db"))).unwrap();
        assert_eq!(db.load_settings().unwrap(), Some(sample()));
    }

    #[test]
    fn test_corrupt_base_url_is_store_fault() {
        let (_dir, db) = create_test_database();
        db.connection()
            .execute(
                "INSERT INTO server_settings (id, base_url, port) VALUES (1, 'not-a-url', 80)",
                [],
            )
            .unwrap();

        let err = db.load_settings().unwrap_err();
        assert!(matches!(err, Error::Corruption { .. }));
        assert_eq!(err.kind(), ErrorKind::StoreFault);
    }

    #[test]
    fn test_read_only_update_is_store_fault() {
        let (dir, db) = create_test_database();
        drop(db);

        let config = DatabaseConfig::new(dir.path().join("settings.db")).read_only();
        let mut db = Database::open(config).unwrap();
        let err = db
            .update_settings(&SettingsChange::All(sample()), &ServerSettings::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StoreFault);
    }
}
