//! Common test utilities for CLI integration tests.
//!
//! Every test gets its own temporary data directory, so tests never touch
//! `~/.lodge` and can run in parallel.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the lodge data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; lodge creates it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("lodge-data");

        Self { temp_dir, data_dir }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("lodge").expect("Failed to find lodge binary");
        for var in [
            "LODGE_DATA_DIR",
            "LODGE_BUSY_TIMEOUT",
            "LODGE_DISABLE_AUTOINIT",
            "LODGE_OUTPUT_FORMAT",
            "LODGE_REJECT_PAST_DATES",
            "LODGE_MAXIMUM_LOCK_WAIT_SECONDS",
            "LODGE_LOG_MODE",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Path of the database file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("lodge.db")
    }

    /// Path of the data directory.
    pub fn path(&self) -> &Path {
        &self.data_dir
    }

    /// Write `config.yaml` into the data directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), contents)
            .expect("Failed to write config");
    }

    /// Book a stay and return its id.
    ///
    /// # Panics
    /// Panics if the create command fails.
    pub fn create(&self, name: &str, start: &str, end: &str) -> i64 {
        let output = self
            .command()
            .args(["--output", "json", "create"])
            .args(["--name", name, "--start", start, "--end", end])
            .output()
            .expect("Failed to run create command");

        assert!(
            output.status.success(),
            "Create failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let json: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("Output is not valid JSON");
        json["id"].as_i64().expect("Output has no id")
    }

    /// List reservations as parsed JSON.
    pub fn list_json(&self) -> Vec<serde_json::Value> {
        let output = self
            .command()
            .args(["--output", "json", "list"])
            .output()
            .expect("Failed to run list command");

        assert!(
            output.status.success(),
            "List failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("Output is not a JSON array")
    }
}
