use crate::atomic::write_atomically;
use crate::backup::{BackupSnapshot, BackupStore, DEFAULT_RETAIN};
use crate::error::{Error, Result};
use crate::validate::{ValidationResult, validate};
use ccman_types::ConfigDocument;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Caller-supplied configuration for a [`ConfigStore`]. All fields have
/// defaults, so `StoreOptions::default()` targets the real `~/.claude.json`.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Override for the live configuration file (default `~/.claude.json`).
    pub config_path: Option<PathBuf>,

    /// Override for the snapshot directory (default `~/.claude_backups`).
    pub backup_dir: Option<PathBuf>,

    /// When false, `save` skips the pre-mutation backup. Opt-in and unsafe:
    /// a bad save then has nothing to restore from.
    pub backups_enabled: bool,

    /// Snapshots kept after pruning.
    pub retain: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            backup_dir: None,
            backups_enabled: true,
            retain: DEFAULT_RETAIN,
        }
    }
}

/// The persistence façade over a single configuration document.
///
/// Owns the live file path and the backup store; every `save` runs
/// backup, then validation, then the atomic write, in that fixed order, so
/// a snapshot of the pre-mutation state exists before the live file is
/// touched. Mutations happen purely in memory on [`ConfigDocument`]; this
/// type is the only way they reach disk.
pub struct ConfigStore {
    config_path: PathBuf,
    backups: BackupStore,
    backups_enabled: bool,
}

impl ConfigStore {
    pub fn new(options: StoreOptions) -> Result<Self> {
        let config_path = match options.config_path {
            Some(path) => path,
            None => home_dir()?.join(".claude.json"),
        };
        let backup_dir = match options.backup_dir {
            Some(dir) => dir,
            None => home_dir()?.join(".claude_backups"),
        };

        Ok(Self {
            config_path,
            backups: BackupStore::new(backup_dir, options.retain),
            backups_enabled: options.backups_enabled,
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn backups(&self) -> &BackupStore {
        &self.backups
    }

    /// Load the live document. A missing file is the first-run case and
    /// yields an empty document; an unparseable file is surfaced as
    /// [`Error::Corrupt`] so the caller can offer restore-from-backup
    /// instead of silently losing data.
    pub fn load(&self) -> Result<ConfigDocument> {
        if !self.config_path.exists() {
            debug!(path = %self.config_path.display(), "no configuration file, starting fresh");
            return Ok(ConfigDocument::default());
        }

        let bytes = fs::read(&self.config_path)?;
        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|err| Error::Corrupt(format!("invalid JSON: {}", err)))?;
        if !value.is_object() {
            return Err(Error::Corrupt(
                "top-level structure is not a JSON object".to_string(),
            ));
        }

        serde_json::from_value(value).map_err(|err| Error::Corrupt(err.to_string()))
    }

    /// Persist `document`, in strict order: back up the current on-disk
    /// content, validate the candidate, atomically write it. Any step's
    /// failure aborts the whole save and leaves the live file untouched.
    pub fn save(&self, document: &ConfigDocument) -> Result<()> {
        if self.backups_enabled && self.config_path.exists() {
            let current = fs::read(&self.config_path)?;
            self.backups.create(&current)?;
        }

        let candidate =
            serde_json::to_value(document).map_err(|err| Error::Write(err.to_string()))?;
        if let ValidationResult::Invalid(reasons) = validate(&candidate) {
            return Err(Error::Validation(reasons));
        }

        let bytes =
            serde_json::to_vec_pretty(&candidate).map_err(|err| Error::Write(err.to_string()))?;
        write_atomically(&self.config_path, &bytes)?;
        info!(path = %self.config_path.display(), "saved configuration");
        Ok(())
    }

    /// Replace the live file with a snapshot's content, subject to the same
    /// validate-then-atomic-write discipline as a normal save. The restored
    /// bytes are written verbatim, so the live file ends up byte-identical
    /// to the snapshot. No backup of the pre-restore state is taken: the
    /// state being replaced is presumed broken.
    pub fn restore_from_backup(&self, snapshot: &BackupSnapshot) -> Result<ConfigDocument> {
        let bytes = self.backups.read(snapshot)?;
        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|err| Error::Corrupt(format!("backup is not valid JSON: {}", err)))?;
        if let ValidationResult::Invalid(reasons) = validate(&value) {
            return Err(Error::Validation(reasons));
        }
        let document =
            serde_json::from_value(value).map_err(|err| Error::Corrupt(err.to_string()))?;

        write_atomically(&self.config_path, &bytes)?;
        info!(
            snapshot = %snapshot.path().display(),
            path = %self.config_path.display(),
            "restored configuration from backup"
        );
        Ok(document)
    }

    /// Size of the live file in bytes, 0 if it does not exist.
    pub fn config_size(&self) -> u64 {
        fs::metadata(&self.config_path)
            .map(|meta| meta.len())
            .unwrap_or(0)
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| {
        Error::Config("could not determine home directory (no HOME set)".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ConfigStore {
        ConfigStore::new(StoreOptions {
            config_path: Some(dir.path().join("claude.json")),
            backup_dir: Some(dir.path().join("backups")),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_load_missing_file_starts_fresh() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let doc = store.load().unwrap();
        assert!(doc.projects.is_empty());
        assert!(doc.extra.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_surfaced_not_replaced() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.config_path(), b"{ not json").unwrap();

        assert!(matches!(store.load(), Err(Error::Corrupt(_))));
        // The broken file is still there for restore-from-backup.
        assert_eq!(fs::read(store.config_path()).unwrap(), b"{ not json");
    }

    #[test]
    fn test_load_non_object_root_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.config_path(), b"[1, 2, 3]").unwrap();
        assert!(matches!(store.load(), Err(Error::Corrupt(_))));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut doc = ConfigDocument::default();
        doc.add_project("/home/dev/alpha").unwrap();
        doc.extra
            .insert("numStartups".to_string(), json!(7));
        store.save(&doc).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_first_save_takes_no_backup_then_one_per_save() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let mut doc = ConfigDocument::default();

        store.save(&doc).unwrap();
        assert!(store.backups().list().unwrap().is_empty());

        doc.add_project("/home/dev/alpha").unwrap();
        store.save(&doc).unwrap();
        doc.add_project("/home/dev/beta").unwrap();
        store.save(&doc).unwrap();
        assert_eq!(store.backups().list().unwrap().len(), 2);
    }

    #[test]
    fn test_backup_captures_pre_mutation_state() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut doc = ConfigDocument::default();
        doc.add_project("/home/dev/alpha").unwrap();
        store.save(&doc).unwrap();
        let before = fs::read(store.config_path()).unwrap();

        doc.remove_project("/home/dev/alpha");
        store.save(&doc).unwrap();

        let backups = store.backups().list().unwrap();
        assert_eq!(store.backups().read(&backups[0]).unwrap(), before);
    }

    #[test]
    fn test_no_backup_mode_skips_snapshots() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::new(StoreOptions {
            config_path: Some(dir.path().join("claude.json")),
            backup_dir: Some(dir.path().join("backups")),
            backups_enabled: false,
            ..Default::default()
        })
        .unwrap();

        let mut doc = ConfigDocument::default();
        store.save(&doc).unwrap();
        doc.add_project("/home/dev/alpha").unwrap();
        store.save(&doc).unwrap();
        assert!(store.backups().list().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_document_never_reaches_disk() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut doc = ConfigDocument::default();
        doc.add_project("/home/dev/alpha").unwrap();
        store.save(&doc).unwrap();
        let before = fs::read(store.config_path()).unwrap();

        // Force contradictory toggle state past the typed operations.
        let record = doc.project_mut("/home/dev/alpha").unwrap();
        record.enabled_mcpjson_servers.push("github".to_string());
        record.disabled_mcpjson_servers.push("github".to_string());

        match store.save(&doc) {
            Err(Error::Validation(reasons)) => {
                assert!(reasons[0].contains("both enabled and disabled"));
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
        assert_eq!(fs::read(store.config_path()).unwrap(), before);
    }

    #[test]
    fn test_restore_is_byte_identical_to_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut doc = ConfigDocument::default();
        doc.add_project("/home/dev/alpha").unwrap();
        store.save(&doc).unwrap();
        doc.clear_all_history();
        doc.add_project("/home/dev/beta").unwrap();
        store.save(&doc).unwrap();

        let snapshot = store.backups().list().unwrap().remove(0);
        let snapshot_bytes = store.backups().read(&snapshot).unwrap();
        let restored = store.restore_from_backup(&snapshot).unwrap();

        assert_eq!(fs::read(store.config_path()).unwrap(), snapshot_bytes);
        assert!(restored.project("/home/dev/alpha").is_some());
        assert!(restored.project("/home/dev/beta").is_none());
    }

    #[test]
    fn test_restore_rejects_corrupt_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut doc = ConfigDocument::default();
        doc.add_project("/home/dev/alpha").unwrap();
        store.save(&doc).unwrap();
        doc.add_project("/home/dev/beta").unwrap();
        store.save(&doc).unwrap();
        let live = fs::read(store.config_path()).unwrap();

        let snapshot = store.backups().list().unwrap().remove(0);
        fs::write(snapshot.path(), b"severed").unwrap();

        assert!(matches!(
            store.restore_from_backup(&snapshot),
            Err(Error::Corrupt(_))
        ));
        assert_eq!(fs::read(store.config_path()).unwrap(), live);
    }
}
