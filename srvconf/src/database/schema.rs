//! Database schema definitions and SQL constants.

/// Current schema version for the database.
///
/// Stored in the metadata table and checked on every open.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the settings table.
///
/// The table holds at most one row. The port range check mirrors the
/// `Port` invariant so that a hand-edited database cannot hold port 0.
pub const CREATE_SETTINGS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS server_settings (
        id INTEGER PRIMARY KEY CHECK (id = 1),
        base_url TEXT,
        port INTEGER NOT NULL CHECK (port BETWEEN 1 AND 65535)
    )";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to read the settings row.
pub const SELECT_SETTINGS: &str = "SELECT base_url, port FROM server_settings WHERE id = 1";

/// SQL statement to write the settings row.
pub const UPSERT_SETTINGS: &str = r"
    INSERT INTO server_settings (id, base_url, port)
    VALUES (1, ?1, ?2)
    ON CONFLICT(id) DO UPDATE SET base_url = excluded.base_url, port = excluded.port
";
