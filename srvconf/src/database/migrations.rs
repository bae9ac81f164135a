//! Schema creation and version checks.

use rusqlite::{Connection, OptionalExtension};

use crate::error::{Error, Result};

use super::schema::{
    CREATE_METADATA_TABLE, CREATE_SETTINGS_TABLE, CURRENT_SCHEMA_VERSION, INSERT_SCHEMA_VERSION,
    SELECT_SCHEMA_VERSION,
};

/// Create the tables and record [`CURRENT_SCHEMA_VERSION`].
///
/// Only valid on a database without a schema.
///
/// # Errors
///
/// Fails if any statement fails.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use srvconf::database::{get_schema_version, initialize_schema};
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// assert_eq!(get_schema_version(&conn).unwrap(), 1);
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(&format!("{CREATE_METADATA_TABLE};\n{CREATE_SETTINGS_TABLE};"))?;
    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;
    Ok(())
}

/// The recorded schema version; 0 when the database has no schema.
///
/// # Errors
///
/// Fails on query errors or a version that is not an integer.
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    let has_metadata: bool = conn.query_row(
        "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'metadata')",
        [],
        |row| row.get(0),
    )?;
    if !has_metadata {
        return Ok(0);
    }

    let Some(raw) = conn
        .query_row(SELECT_SCHEMA_VERSION, [], |row| row.get::<_, String>(0))
        .optional()?
    else {
        return Ok(0);
    };

    raw.parse().map_err(|_| Error::Corruption {
        details: format!("schema version '{raw}' is not a number"),
    })
}

/// Checks schema compatibility and initializes if needed.
///
/// A fresh database (version 0) is initialized; any version other than
/// the current one is rejected.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] for an incompatible
/// version, or a database error if initialization fails.
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        initialize_schema(conn)?;
    } else if version != CURRENT_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        });
    }

    Ok(())
}
