use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// One tracked Claude Code project, keyed in the document by its path.
///
/// Only the fields the tool actively manipulates are modeled; everything
/// else the file carries for a project (trust flags, onboarding counters,
/// crawl settings) is kept verbatim in `extra` and re-serialized unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(default)]
    pub allowed_tools: Vec<String>,

    /// Chronological command history; each entry is an opaque record
    /// (typically a display/timestamp pair written by Claude Code).
    #[serde(default)]
    pub history: Vec<Value>,

    #[serde(default)]
    pub mcp_servers: Map<String, Value>,

    #[serde(default)]
    pub enabled_mcpjson_servers: Vec<String>,

    #[serde(default)]
    pub disabled_mcpjson_servers: Vec<String>,

    /// Pass-through fields this tool does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProjectRecord {
    pub fn history_count(&self) -> usize {
        self.history.len()
    }

    /// The `display` string of the most recent history entry, if any.
    pub fn last_accessed(&self) -> Option<&str> {
        self.history.last()?.get("display")?.as_str()
    }

    /// Keep only the last `n` history entries, preserving order.
    /// Returns the number of entries dropped.
    pub fn retain_last_history(&mut self, n: usize) -> usize {
        let len = self.history.len();
        if len <= n {
            return 0;
        }
        self.history.drain(..len - n);
        len - n
    }

    /// Clear all history entries, returning how many were removed.
    pub fn clear_history(&mut self) -> usize {
        let count = self.history.len();
        self.history.clear();
        count
    }

    /// Mark an .mcp.json server as enabled, removing it from the disabled
    /// list so a name never appears in both.
    pub fn enable_mcpjson_server(&mut self, name: &str) {
        self.disabled_mcpjson_servers.retain(|s| s != name);
        if !self.enabled_mcpjson_servers.iter().any(|s| s == name) {
            self.enabled_mcpjson_servers.push(name.to_string());
        }
    }

    /// Mark an .mcp.json server as disabled, removing it from the enabled
    /// list so a name never appears in both.
    pub fn disable_mcpjson_server(&mut self, name: &str) {
        self.enabled_mcpjson_servers.retain(|s| s != name);
        if !self.disabled_mcpjson_servers.iter().any(|s| s == name) {
            self.disabled_mcpjson_servers.push(name.to_string());
        }
    }

    /// Register or replace an MCP server configuration.
    pub fn set_mcp_server(&mut self, name: &str, config: Value) {
        self.mcp_servers.insert(name.to_string(), config);
    }

    /// Remove an MCP server registration. Returns true if it existed.
    pub fn remove_mcp_server(&mut self, name: &str) -> bool {
        let existed = self.mcp_servers.remove(name).is_some();
        if existed {
            self.enabled_mcpjson_servers.retain(|s| s != name);
            self.disabled_mcpjson_servers.retain(|s| s != name);
        }
        existed
    }

    /// Rough on-disk footprint of this record in bytes.
    pub fn size_estimate(&self) -> usize {
        serde_json::to_string(self).map(|s| s.len()).unwrap_or(0)
    }
}

/// Check whether a project's directory still exists on the filesystem.
pub fn directory_exists(project_path: &str) -> bool {
    Path::new(project_path).exists()
}
