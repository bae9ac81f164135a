//! Common test utilities for CLI integration tests.
//!
//! Each [`TestEnv`] owns a temporary directory, so tests never touch the
//! user's real data directory or each other's databases.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host settings into a test.
const ISOLATED_VARS: [&str; 7] = [
    "SRVCONF_DATA_DIR",
    "SRVCONF_BUSY_TIMEOUT",
    "SRVCONF_ACCEPT",
    "SRVCONF_GRANTS",
    "SRVCONF_LOG_MODE",
    "SRVCONF_DEFAULT_PORT",
    "SRVCONF_BUSY_TIMEOUT_MS",
];

/// Test environment with isolated data directory.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the srvconf data directory (created on first write)
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("srvconf-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// The srvconf binary with host settings cleared and no flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("srvconf").expect("Failed to find srvconf binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// The srvconf binary pointed at this environment's data directory.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write `config.yaml` into the data directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), contents)
            .expect("Failed to write config");
    }

    /// Run `set-server-settings` and require success.
    pub fn set_settings(&self, base_url: &str, port: u16) {
        self.command()
            .arg("set-server-settings")
            .arg("--base-url")
            .arg(base_url)
            .arg("--port")
            .arg(port.to_string())
            .assert()
            .success();
    }

    /// Run a command and return its trimmed stdout, requiring success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run");
        assert!(
            output.status.success(),
            "command {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }
}
