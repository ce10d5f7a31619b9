use crate::render;
use anyhow::{Result, bail};
use ccman_engine::ConfigStore;
use ccman_types::directory_exists;

pub fn handle(store: &ConfigStore, path: &str) -> Result<()> {
    let document = store.load()?;

    let Some(record) = document.project(path) else {
        bail!("No such project: {}", path);
    };

    println!("Project: {}", path);
    println!(
        "Directory exists: {}",
        if directory_exists(path) { "yes" } else { "no" }
    );
    println!("Approximate size: {}", render::format_size(record.size_estimate() as u64));
    println!();

    println!("History entries: {}", record.history_count());
    for entry in record.history.iter().rev().take(5) {
        let display = entry.get("display").and_then(|v| v.as_str()).unwrap_or("?");
        println!("  {}", render::truncate(display, 80));
    }
    println!();

    println!("Allowed tools: {}", record.allowed_tools.len());
    for tool in &record.allowed_tools {
        println!("  {}", tool);
    }
    println!();

    println!("MCP servers: {}", record.mcp_servers.len());
    for name in record.mcp_servers.keys() {
        println!("  {}", name);
    }
    if !record.enabled_mcpjson_servers.is_empty() {
        println!("Enabled .mcp.json servers: {}", record.enabled_mcpjson_servers.join(", "));
    }
    if !record.disabled_mcpjson_servers.is_empty() {
        println!("Disabled .mcp.json servers: {}", record.disabled_mcpjson_servers.join(", "));
    }

    Ok(())
}
