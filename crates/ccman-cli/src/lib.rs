pub mod args;
pub mod commands;
pub mod handlers;
pub mod render;

pub use args::Cli;
pub use commands::run;
