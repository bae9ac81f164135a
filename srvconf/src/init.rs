//! Data directory initialization.
//!
//! Creates the data directory and settings database ahead of first use,
//! optionally with a commented configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;
use crate::database::{Database, DatabaseConfig, DATABASE_FILE_NAME};
use crate::error::{Error, Result};

/// Options for [`init_data_dir`].
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Replace an existing database.
    pub overwrite: bool,
    /// Write a default configuration file.
    pub create_config: bool,
}

impl InitOptions {
    /// Options that create the directory and database only.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            overwrite: false,
            create_config: false,
        }
    }

    /// Sets whether to replace an existing database.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to write a default configuration file.
    #[must_use]
    pub fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }
}

/// What [`init_data_dir`] created.
#[derive(Debug)]
pub struct InitResult {
    /// The initialized directory.
    pub data_dir: PathBuf,
    /// The directory did not exist before.
    pub data_dir_created: bool,
    /// The database was created or recreated.
    pub database_created: bool,
    /// A configuration file was written.
    pub config_created: bool,
}

/// Every key is commented out, so the file parses to the built-in defaults.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# srvconf configuration file

# Port used until one is stored (default: 48080)
# settings:
#   default_port: 48080

# Milliseconds to wait for a locked database (default: 5000)
# database:
#   busy_timeout_ms: 5000

# Response format when none is requested (default: text/plain)
# output:
#   accept: "text/plain"
"#;

fn remove_database_files(db_path: &Path) -> Result<()> {
    fs::remove_file(db_path)?;
    for suffix in ["-wal", "-shm"] {
        let mut sidecar = db_path.as_os_str().to_owned();
        sidecar.push(suffix);
        let sidecar = PathBuf::from(sidecar);
        if sidecar.exists() {
            fs::remove_file(sidecar)?;
        }
    }
    Ok(())
}

/// Initializes a data directory.
///
/// # Errors
///
/// Returns an error if the database exists and `overwrite` is not set,
/// or if a file or directory cannot be created.
///
/// # Examples
///
/// ```no_run
/// use srvconf::init::{init_data_dir, InitOptions};
///
/// let options = InitOptions::new("/tmp/srvconf").with_create_config(true);
/// let result = init_data_dir(&options).unwrap();
/// assert!(result.database_created);
/// ```
pub fn init_data_dir(options: &InitOptions) -> Result<InitResult> {
    let mut result = InitResult {
        data_dir: options.data_dir.clone(),
        data_dir_created: false,
        database_created: false,
        config_created: false,
    };

    if !options.data_dir.exists() {
        fs::create_dir_all(&options.data_dir)?;
        result.data_dir_created = true;
    }

    let db_path = options.data_dir.join(DATABASE_FILE_NAME);
    if db_path.exists() {
        if !options.overwrite {
            return Err(Error::Validation {
                field: "database".into(),
                message: format!(
                    "database already exists at {}; use --overwrite to replace it",
                    db_path.display()
                ),
            });
        }
        remove_database_files(&db_path)?;
    }

    Database::open(DatabaseConfig::new(&db_path))?;
    result.database_created = true;
    log::debug!("Created settings database at {}", db_path.display());

    if options.create_config {
        let config_path = options.data_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            result.config_created = true;
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::database::get_schema_version;
    use tempfile::TempDir;

    #[test]
    fn test_init_fresh_directory() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("srvconf");

        let result = init_data_dir(&InitOptions::new(&data_dir)).unwrap();

        assert!(result.data_dir_created);
        assert!(result.database_created);
        assert!(!result.config_created);
        assert!(data_dir.join(DATABASE_FILE_NAME).exists());
        assert!(!data_dir.join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_init_refuses_existing_database() {
        let temp = TempDir::new().unwrap();
        init_data_dir(&InitOptions::new(temp.path())).unwrap();

        let err = init_data_dir(&InitOptions::new(temp.path())).unwrap_err();
        assert_eq!(err.field(), Some("database"));
    }

    #[test]
    fn test_init_overwrite_recreates_database() {
        let temp = TempDir::new().unwrap();
        init_data_dir(&InitOptions::new(temp.path())).unwrap();

        let result =
            init_data_dir(&InitOptions::new(temp.path()).with_overwrite(true)).unwrap();
        assert!(result.database_created);
        assert!(!result.data_dir_created);

        let db = Database::open(DatabaseConfig::new(temp.path().join(DATABASE_FILE_NAME)))
            .unwrap();
        assert_eq!(get_schema_version(db.connection()).unwrap(), 1);
    }

    #[test]
    fn test_config_template_parses_to_defaults() {
        let temp = TempDir::new().unwrap();
        let result =
            init_data_dir(&InitOptions::new(temp.path()).with_create_config(true)).unwrap();
        assert!(result.config_created);

        let config = ConfigLoader::load_file(&temp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config.default_port(), None);
        assert_eq!(config.accept(), "text/plain");
    }

    #[test]
    fn test_existing_config_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "settings:\n  default_port: 9000\n").unwrap();

        let result =
            init_data_dir(&InitOptions::new(temp.path()).with_create_config(true)).unwrap();
        assert!(!result.config_created);
        assert!(fs::read_to_string(config_path).unwrap().contains("9000"));
    }
}
