//! Testing infrastructure for ccman integration tests.
//!
//! - `TestWorld`: isolated home directory with a seeded configuration file
//! - `fixtures`: sample configuration documents

pub mod fixtures;
pub mod world;

pub use world::TestWorld;
