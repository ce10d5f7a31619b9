pub mod add;
pub mod backup;
pub mod history;
pub mod list;
pub mod mcp;
pub mod remove;
pub mod show;
pub mod stats;
