use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ccman")]
#[command(about = "Manage Claude Code projects stored in ~/.claude.json", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the claude.json configuration file (default: ~/.claude.json)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for configuration backups (default: ~/.claude_backups)
    #[arg(long, global = true)]
    pub backup_dir: Option<PathBuf>,

    /// Disable automatic backups when making changes (unsafe)
    #[arg(long, global = true)]
    pub no_backup: bool,

    /// Number of backups to keep
    #[arg(long, default_value = "10", global = true)]
    pub retain: usize,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tracked projects
    List,

    /// Show details for one project
    Show {
        /// Project path as stored in the configuration
        path: String,
    },

    /// Start tracking a project
    Add {
        /// Filesystem path of the project
        path: String,
    },

    /// Remove projects from the configuration
    Remove {
        /// Explicit project paths to remove
        paths: Vec<String>,

        /// Remove projects whose directory no longer exists
        #[arg(long)]
        missing: bool,

        /// Remove projects with no history entries
        #[arg(long)]
        empty_history: bool,

        /// Apply the removal; without this flag the selection is only printed
        #[arg(short, long)]
        yes: bool,
    },

    /// Manage project command history
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },

    /// Manage MCP server registrations
    Mcp {
        #[command(subcommand)]
        command: McpCommand,
    },

    /// Manage configuration backups
    Backup {
        #[command(subcommand)]
        command: BackupCommand,
    },

    /// Show configuration statistics
    Stats,
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// Delete history entries
    Clear {
        /// Project paths to clear (all projects with --all)
        paths: Vec<String>,

        #[arg(long)]
        all: bool,
    },

    /// Keep only the most recent N history entries
    Retain {
        /// Number of entries to keep
        n: usize,

        /// Project paths to trim (all projects with --all)
        paths: Vec<String>,

        #[arg(long)]
        all: bool,
    },
}

#[derive(Subcommand)]
pub enum McpCommand {
    /// List a project's MCP servers and .mcp.json toggles
    List { path: String },

    /// Register an MCP server for a project
    Add {
        path: String,
        server: String,

        /// Server configuration as a JSON object, e.g. '{"command": "gh-mcp"}'
        #[arg(id = "server_config", value_name = "CONFIG")]
        config: String,
    },

    /// Enable an .mcp.json server for a project
    Enable { path: String, server: String },

    /// Disable an .mcp.json server for a project
    Disable { path: String, server: String },

    /// Remove an MCP server registration from a project
    Remove { path: String, server: String },
}

#[derive(Subcommand)]
pub enum BackupCommand {
    /// List available backups, newest first
    List,

    /// Snapshot the current configuration file
    Create,

    /// Restore the configuration from a backup
    Restore {
        /// Backup filename as shown by `backup list`
        file_name: String,
    },

    /// Delete all but the most recent backups (count set by --retain)
    Prune,
}
