//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use assert_cmd::assert::Assert;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An isolated home directory with a configuration file and backup
/// directory, plus a runner that points the `ccman` binary at them.
///
/// # Example
/// ```no_run
/// use ccman_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new().with_config(fixtures::sample_config());
/// world.run(&["list"]).unwrap().success();
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    backup_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join(".claude.json");
        let backup_dir = temp_dir.path().join(".claude_backups");
        Self {
            temp_dir,
            config_path,
            backup_dir,
        }
    }

    /// Seed the configuration file with a JSON document.
    pub fn with_config(self, document: Value) -> Self {
        let pretty = serde_json::to_vec_pretty(&document).expect("Failed to serialize fixture");
        fs::write(&self.config_path, pretty).expect("Failed to write fixture config");
        self
    }

    /// Seed the configuration file with raw bytes (e.g. corrupt content).
    pub fn with_raw_config(self, bytes: &[u8]) -> Self {
        fs::write(&self.config_path, bytes).expect("Failed to write fixture config");
        self
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Parse the current on-disk configuration.
    pub fn read_config(&self) -> Result<Value> {
        Ok(serde_json::from_slice(&fs::read(&self.config_path)?)?)
    }

    /// Raw bytes of the current on-disk configuration.
    pub fn read_config_bytes(&self) -> Result<Vec<u8>> {
        Ok(fs::read(&self.config_path)?)
    }

    /// Names of the backup files currently on disk, unsorted.
    pub fn backup_files(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.backup_dir) else {
            return Vec::new();
        };
        entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect()
    }

    /// Run `ccman` with this world's config and backup paths injected.
    pub fn run(&self, args: &[&str]) -> Result<Assert> {
        let mut cmd = Command::cargo_bin("ccman")?;
        cmd.arg("--config")
            .arg(&self.config_path)
            .arg("--backup-dir")
            .arg(&self.backup_dir)
            .args(args)
            .current_dir(self.temp_dir.path());
        Ok(cmd.assert())
    }
}
