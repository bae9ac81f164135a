//! Where the settings database lives and how it is opened.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::schema::DEFAULT_BUSY_TIMEOUT_MS;
use crate::error::{Error, Result};

/// File name of the settings database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "settings.db";

/// Name of the data directory under the user's home.
const DATA_DIR_NAME: &str = ".srvconf";

/// Open parameters for a [`Database`](super::Database).
///
/// # Examples
///
/// ```
/// use srvconf::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::in_data_dir("/var/lib/srvconf")
///     .with_busy_timeout(Duration::from_secs(10));
/// assert!(config.path.ends_with("settings.db"));
/// assert_eq!(config.busy_timeout, Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// The database file.
    pub path: PathBuf,
    /// How long a connection waits on a locked database.
    pub busy_timeout: Duration,
    /// Create the file and its parent directory when missing.
    pub auto_create: bool,
    /// Open without write access.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// A writable, auto-created database at `path`.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
            auto_create: true,
            read_only: false,
        }
    }

    /// The database file inside `data_dir`.
    #[must_use]
    pub fn in_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(DATABASE_FILE_NAME))
    }

    /// Replace the busy timeout.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Open read-only. A read-only database is never created.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// The default data directory, `~/.srvconf`.
///
/// # Errors
///
/// Fails when the home directory is unknown.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "data_dir".into(),
        message: "no home directory; pass --data-dir or set SRVCONF_DATA_DIR".into(),
    })?;
    Ok(home.join(DATA_DIR_NAME))
}
