use crate::render;
use anyhow::{Context, Result, bail};
use ccman_engine::ConfigStore;

pub fn list(store: &ConfigStore, path: &str) -> Result<()> {
    let document = store.load()?;
    let Some(record) = document.project(path) else {
        bail!("No such project: {}", path);
    };

    if record.mcp_servers.is_empty()
        && record.enabled_mcpjson_servers.is_empty()
        && record.disabled_mcpjson_servers.is_empty()
    {
        println!("No MCP servers configured for {}", path);
        return Ok(());
    }

    for (name, config) in &record.mcp_servers {
        let command = config
            .get("command")
            .and_then(|v| v.as_str())
            .unwrap_or("(no command)");
        println!("{:<30} {}", name, render::truncate(command, 60));
    }
    for name in &record.enabled_mcpjson_servers {
        println!("{:<30} [.mcp.json, enabled]", name);
    }
    for name in &record.disabled_mcpjson_servers {
        println!("{:<30} [.mcp.json, disabled]", name);
    }
    Ok(())
}

pub fn add(store: &ConfigStore, path: &str, server: &str, config: &str) -> Result<()> {
    let config: serde_json::Value =
        serde_json::from_str(config).context("server config must be valid JSON")?;
    if !config.is_object() {
        bail!("Server config must be a JSON object");
    }

    let mut document = store.load()?;
    document.set_mcp_server(path, server, config)?;
    store.save(&document)?;
    render::success(&format!("Registered {} for {}", server, path));
    Ok(())
}

pub fn enable(store: &ConfigStore, path: &str, server: &str) -> Result<()> {
    let mut document = store.load()?;
    document.enable_mcpjson_server(path, server)?;
    store.save(&document)?;
    render::success(&format!("Enabled {} for {}", server, path));
    Ok(())
}

pub fn disable(store: &ConfigStore, path: &str, server: &str) -> Result<()> {
    let mut document = store.load()?;
    document.disable_mcpjson_server(path, server)?;
    store.save(&document)?;
    render::success(&format!("Disabled {} for {}", server, path));
    Ok(())
}

pub fn remove(store: &ConfigStore, path: &str, server: &str) -> Result<()> {
    let mut document = store.load()?;
    if !document.remove_mcp_server(path, server)? {
        bail!("No such MCP server '{}' for {}", server, path);
    }
    store.save(&document)?;
    render::success(&format!("Removed {} from {}", server, path));
    Ok(())
}
