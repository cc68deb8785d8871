//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Fixture helpers that register buses and customers

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated data directory.
///
/// Commands run with the temporary directory as their working directory
/// and with every `BUSRES_*` variable removed, so no outside configuration
/// leaks into a test.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the busres data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; busres creates it on first write.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("busres-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without `--data-dir`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("busres").expect("Failed to find busres binary");
        cmd.current_dir(&self.temp_path)
            .env_remove("BUSRES_DATA_DIR")
            .env_remove("BUSRES_ALLOW_DUPLICATE_BOOKINGS")
            .env_remove("BUSRES_OUTPUT_FORMAT")
            .env_remove("BUSRES_LOG_MODE");
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of a file inside the data directory.
    pub fn data_file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    /// Read a file from the data directory.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.data_file(name)).expect("Failed to read data file")
    }

    /// Write a file into the data directory, creating it if needed.
    pub fn write(&self, name: &str, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_file(name), contents).expect("Failed to write data file");
    }

    /// Register a bus from Pune to Goa with the given seat count.
    pub fn register_bus(&self, number: &str, seats: u32) {
        self.command()
            .args(["register-bus", number, "--seats", &seats.to_string()])
            .args(["--from", "Pune", "--to", "Goa", "--time", "08:00", "--fare", "450"])
            .assert()
            .success();
    }

    /// Register a customer with fixed contact details.
    pub fn register_customer(&self, name: &str) {
        self.command()
            .args(["register-customer", name])
            .args(["--mobile", "555-0100", "--city", "Pune", "--age", "30"])
            .arg("--email")
            .arg(format!("{}@example.com", name.to_lowercase()))
            .assert()
            .success();
    }

    /// Reserve a seat and require success.
    pub fn reserve(&self, customer: &str, bus: &str) {
        self.command()
            .args(["reserve", customer, bus])
            .assert()
            .success();
    }

    /// Run a listing command in JSON format and return the names in order.
    pub fn names(&self, args: &[&str]) -> Vec<String> {
        let output = self
            .command()
            .args(args)
            .args(["--format", "json"])
            .output()
            .expect("Failed to run listing command");
        assert!(
            output.status.success(),
            "Listing failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let rows: Vec<serde_json::Value> =
            serde_json::from_slice(&output.stdout).expect("Output is not a JSON array");
        rows.iter()
            .map(|row| row["name"].as_str().expect("row without name").to_string())
            .collect()
    }
}
