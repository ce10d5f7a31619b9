pub mod document;
pub mod error;
pub mod project;

pub use document::*;
pub use error::{Error, Result};
pub use project::*;
