use crate::error::{Error, Result};
use chrono::{Local, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Number of snapshots kept after pruning unless overridden.
pub const DEFAULT_RETAIN: usize = 10;

const SNAPSHOT_PREFIX: &str = "claude_";
const SNAPSHOT_SUFFIX: &str = ".json";

/// Timestamp format embedded in snapshot filenames. Microsecond precision
/// keeps two backups taken within the same second from colliding.
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S_%6f";

/// An immutable, timestamped copy of the serialized configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct BackupSnapshot {
    path: PathBuf,
    created_at: NaiveDateTime,
}

impl BackupSnapshot {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Snapshot filename, e.g. `claude_20250115_103000_123456.json`.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Manages the directory of configuration snapshots.
///
/// Snapshots are content-addressed by creation time, not by hash: the use
/// case is "undo my last destructive action", not deduplication.
#[derive(Debug, Clone)]
pub struct BackupStore {
    dir: PathBuf,
    retain: usize,
}

impl BackupStore {
    pub fn new(dir: PathBuf, retain: usize) -> Self {
        Self { dir, retain }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn retain(&self) -> usize {
        self.retain
    }

    /// Write `bytes` verbatim to a new timestamped snapshot, creating the
    /// backup directory if needed. Retention pruning runs immediately
    /// afterwards so the directory never grows unbounded.
    pub fn create(&self, bytes: &[u8]) -> Result<BackupSnapshot> {
        fs::create_dir_all(&self.dir).map_err(|err| {
            Error::BackupWrite(format!(
                "cannot create backup directory {}: {}",
                self.dir.display(),
                err
            ))
        })?;

        let created_at = Local::now().naive_local();
        let file_name = format!(
            "{}{}{}",
            SNAPSHOT_PREFIX,
            created_at.format(TIMESTAMP_FORMAT),
            SNAPSHOT_SUFFIX
        );
        let path = self.dir.join(&file_name);

        fs::write(&path, bytes).map_err(|err| {
            Error::BackupWrite(format!("cannot write {}: {}", path.display(), err))
        })?;
        debug!(snapshot = %path.display(), "created backup");

        self.prune(self.retain);

        Ok(BackupSnapshot { path, created_at })
    }

    /// All snapshots in the backup directory, newest first. Files whose
    /// names do not parse as snapshot timestamps are skipped.
    pub fn list(&self) -> Result<Vec<BackupSnapshot>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut snapshots = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            if let Some(created_at) = parse_snapshot_name(&name) {
                snapshots.push(BackupSnapshot {
                    path: entry.path(),
                    created_at,
                });
            }
        }

        snapshots.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(snapshots)
    }

    /// Look up a snapshot by its filename.
    pub fn find(&self, file_name: &str) -> Result<BackupSnapshot> {
        let path = self.dir.join(file_name);
        match parse_snapshot_name(file_name) {
            Some(created_at) if path.exists() => Ok(BackupSnapshot { path, created_at }),
            _ => Err(Error::BackupNotFound(path)),
        }
    }

    /// Delete all but the `retain` most recent snapshots. Best-effort:
    /// individual failures are logged and skipped, since losing an old
    /// backup is not safety-critical.
    pub fn prune(&self, retain: usize) {
        let snapshots = match self.list() {
            Ok(snapshots) => snapshots,
            Err(err) => {
                warn!(dir = %self.dir.display(), %err, "cannot list backups for pruning");
                return;
            }
        };

        for snapshot in snapshots.iter().skip(retain) {
            if let Err(err) = fs::remove_file(&snapshot.path) {
                warn!(snapshot = %snapshot.path.display(), %err, "failed to prune backup");
            } else {
                debug!(snapshot = %snapshot.path.display(), "pruned old backup");
            }
        }
    }

    /// Read the raw bytes of a snapshot.
    pub fn read(&self, snapshot: &BackupSnapshot) -> Result<Vec<u8>> {
        if !snapshot.path.exists() {
            return Err(Error::BackupNotFound(snapshot.path.clone()));
        }
        Ok(fs::read(&snapshot.path)?)
    }
}

fn parse_snapshot_name(name: &str) -> Option<NaiveDateTime> {
    let stem = name
        .strip_prefix(SNAPSHOT_PREFIX)?
        .strip_suffix(SNAPSHOT_SUFFIX)?;
    NaiveDateTime::parse_from_str(stem, TIMESTAMP_FORMAT).ok()
}
