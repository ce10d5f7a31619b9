use crate::render;
use anyhow::Result;
use ccman_engine::ConfigStore;
use ccman_types::directory_exists;

pub fn handle(store: &ConfigStore) -> Result<()> {
    let document = store.load()?;

    if document.projects.is_empty() {
        println!("No projects tracked in {}", store.config_path().display());
        return Ok(());
    }

    println!(
        "{:<50} {:>8} {:>6} {:>7}  LAST COMMAND",
        "PATH", "HISTORY", "MCP", "EXISTS"
    );
    println!("{}", "-".repeat(100));

    for (path, record) in &document.projects {
        println!(
            "{:<50} {:>8} {:>6} {:>7}  {}",
            render::truncate(path, 50),
            record.history_count(),
            record.mcp_servers.len(),
            if directory_exists(path) { "yes" } else { "NO" },
            render::truncate(record.last_accessed().unwrap_or("-"), 40)
        );
    }

    println!();
    println!("{} projects", document.projects.len());
    Ok(())
}
