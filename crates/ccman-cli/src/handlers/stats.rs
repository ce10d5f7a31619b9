use crate::render;
use anyhow::Result;
use ccman_engine::ConfigStore;

pub fn handle(store: &ConfigStore) -> Result<()> {
    let document = store.load()?;
    let stats = document.stats();

    println!("Configuration: {}", store.config_path().display());
    println!("File size: {}", render::format_size(store.config_size()));
    println!();
    println!("Projects: {}", stats.total_projects);
    println!("History entries: {}", stats.total_history_entries);
    println!("MCP servers: {}", stats.total_mcp_servers);
    println!();
    println!("Startups: {}", stats.num_startups);
    println!(
        "First start: {}",
        stats.first_start_time.as_deref().unwrap_or("N/A")
    );
    println!("Account: {}", stats.user_email.as_deref().unwrap_or("N/A"));
    println!(
        "Organization: {}",
        stats.organization.as_deref().unwrap_or("N/A")
    );
    Ok(())
}
