use std::fmt;

/// Result type for ccman-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the data model layer
#[derive(Debug)]
pub enum Error {
    /// A project path key must be a non-empty string
    EmptyProjectPath,

    /// The project path is already tracked in the document
    DuplicateProject(String),

    /// The project path is not tracked in the document
    UnknownProject(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyProjectPath => write!(f, "Project path must not be empty"),
            Error::DuplicateProject(path) => write!(f, "Project already exists: {}", path),
            Error::UnknownProject(path) => write!(f, "No such project: {}", path),
        }
    }
}

impl std::error::Error for Error {}
