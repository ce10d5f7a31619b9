use crate::error::{Error, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace the file at `path` so readers only ever observe the fully-old or
/// fully-new content.
///
/// The bytes are written to a temporary file in the same directory (same
/// filesystem, so the rename is atomic), fsynced, then renamed over `path`.
/// On any failure before the rename the temporary file is removed and the
/// original file is untouched.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|err| {
        Error::Write(format!(
            "failed to create temporary file in {}: {}",
            dir.display(),
            err
        ))
    })?;

    tmp.write_all(bytes)
        .map_err(|err| Error::Write(format!("failed to write temporary file: {}", err)))?;

    tmp.as_file()
        .sync_all()
        .map_err(|err| Error::Write(format!("failed to sync temporary file: {}", err)))?;

    // persist() renames over the target; the PersistError drop cleans up
    // the temporary file if the rename fails.
    tmp.persist(path).map_err(|err| {
        Error::Write(format!("failed to persist {}: {}", path.display(), err.error))
    })?;

    Ok(())
}
