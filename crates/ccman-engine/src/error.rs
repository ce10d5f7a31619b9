use std::fmt;
use std::path::PathBuf;

/// Result type for ccman-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the persistence engine
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error (paths, environment)
    Config(String),

    /// The live file exists but cannot be parsed; the caller should offer
    /// restore-from-backup rather than silently starting over
    Corrupt(String),

    /// A candidate document failed structural validation; carries every
    /// reason found, not just the first
    Validation(Vec<String>),

    /// A backup snapshot could not be written
    BackupWrite(String),

    /// A backup snapshot no longer exists on disk
    BackupNotFound(PathBuf),

    /// The atomic write of the live file failed; the previous content is
    /// still intact
    Write(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Corrupt(msg) => write!(f, "Corrupt configuration file: {}", msg),
            Error::Validation(reasons) => {
                write!(f, "Document failed validation: {}", reasons.join("; "))
            }
            Error::BackupWrite(msg) => write!(f, "Failed to write backup: {}", msg),
            Error::BackupNotFound(path) => {
                write!(f, "Backup not found: {}", path.display())
            }
            Error::Write(msg) => write!(f, "Failed to write configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Config(_)
            | Error::Corrupt(_)
            | Error::Validation(_)
            | Error::BackupWrite(_)
            | Error::BackupNotFound(_)
            | Error::Write(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
