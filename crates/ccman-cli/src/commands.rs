use crate::args::{BackupCommand, Cli, Commands, HistoryCommand, McpCommand};
use crate::handlers;
use anyhow::Result;
use ccman_engine::{ConfigStore, StoreOptions};

pub fn run(cli: Cli) -> Result<()> {
    let store = ConfigStore::new(StoreOptions {
        config_path: cli.config,
        backup_dir: cli.backup_dir,
        backups_enabled: !cli.no_backup,
        retain: cli.retain,
    })?;

    match cli.command {
        Commands::List => handlers::list::handle(&store),

        Commands::Show { path } => handlers::show::handle(&store, &path),

        Commands::Add { path } => handlers::add::handle(&store, &path),

        Commands::Remove {
            paths,
            missing,
            empty_history,
            yes,
        } => handlers::remove::handle(&store, paths, missing, empty_history, yes),

        Commands::History { command } => match command {
            HistoryCommand::Clear { paths, all } => handlers::history::clear(&store, paths, all),
            HistoryCommand::Retain { n, paths, all } => {
                handlers::history::retain(&store, n, paths, all)
            }
        },

        Commands::Mcp { command } => match command {
            McpCommand::List { path } => handlers::mcp::list(&store, &path),
            McpCommand::Add {
                path,
                server,
                config,
            } => handlers::mcp::add(&store, &path, &server, &config),
            McpCommand::Enable { path, server } => handlers::mcp::enable(&store, &path, &server),
            McpCommand::Disable { path, server } => handlers::mcp::disable(&store, &path, &server),
            McpCommand::Remove { path, server } => handlers::mcp::remove(&store, &path, &server),
        },

        Commands::Backup { command } => match command {
            BackupCommand::List => handlers::backup::list(&store),
            BackupCommand::Create => handlers::backup::create(&store),
            BackupCommand::Restore { file_name } => handlers::backup::restore(&store, &file_name),
            BackupCommand::Prune => handlers::backup::prune(&store),
        },

        Commands::Stats => handlers::stats::handle(&store),
    }
}
