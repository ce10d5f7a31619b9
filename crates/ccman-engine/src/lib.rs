pub mod atomic;
pub mod backup;
pub mod error;
pub mod store;
pub mod validate;

pub use atomic::write_atomically;
pub use backup::{BackupSnapshot, BackupStore, DEFAULT_RETAIN};
pub use error::{Error, Result};
pub use store::{ConfigStore, StoreOptions};
pub use validate::{ValidationResult, validate};
