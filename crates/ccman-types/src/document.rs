use crate::error::{Error, Result};
use crate::project::{ProjectRecord, directory_exists};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The root of `~/.claude.json`.
///
/// Claude Code writes many top-level fields this tool has no business
/// interpreting (startup counters, OAuth account info, feature flags).
/// Those are captured in `extra` and written back verbatim; only the
/// `projects` mapping is decoded into typed records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default)]
    pub projects: BTreeMap<String, ProjectRecord>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Summary figures for the whole document.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigStats {
    pub total_projects: usize,
    pub total_history_entries: usize,
    pub total_mcp_servers: usize,
    pub num_startups: u64,
    pub first_start_time: Option<String>,
    pub user_email: Option<String>,
    pub organization: Option<String>,
}

impl ConfigDocument {
    pub fn project(&self, path: &str) -> Option<&ProjectRecord> {
        self.projects.get(path)
    }

    pub fn project_mut(&mut self, path: &str) -> Option<&mut ProjectRecord> {
        self.projects.get_mut(path)
    }

    fn require_mut(&mut self, path: &str) -> Result<&mut ProjectRecord> {
        self.projects
            .get_mut(path)
            .ok_or_else(|| Error::UnknownProject(path.to_string()))
    }

    /// Start tracking a new project with a default record.
    pub fn add_project(&mut self, path: &str) -> Result<()> {
        if path.is_empty() {
            return Err(Error::EmptyProjectPath);
        }
        if self.projects.contains_key(path) {
            return Err(Error::DuplicateProject(path.to_string()));
        }
        self.projects.insert(path.to_string(), ProjectRecord::default());
        Ok(())
    }

    /// Remove one project. Returns true if it was tracked.
    pub fn remove_project(&mut self, path: &str) -> bool {
        self.projects.remove(path).is_some()
    }

    /// Remove an explicit set of projects, returning how many were removed.
    pub fn remove_projects<'a>(&mut self, paths: impl IntoIterator<Item = &'a str>) -> usize {
        paths
            .into_iter()
            .filter(|path| self.remove_project(path))
            .count()
    }

    /// Remove every project matching the predicate; the primitive behind
    /// all removal strategies. Returns the removed paths.
    pub fn remove_projects_where(
        &mut self,
        mut predicate: impl FnMut(&str, &ProjectRecord) -> bool,
    ) -> Vec<String> {
        let doomed: Vec<String> = self
            .projects
            .iter()
            .filter(|(path, record)| predicate(path, record))
            .map(|(path, _)| path.clone())
            .collect();
        for path in &doomed {
            self.projects.remove(path);
        }
        doomed
    }

    /// Paths of tracked projects whose directory no longer exists.
    pub fn missing_project_paths(&self) -> Vec<String> {
        self.projects
            .keys()
            .filter(|path| !directory_exists(path))
            .cloned()
            .collect()
    }

    /// Paths of tracked projects with no history entries.
    pub fn empty_history_paths(&self) -> Vec<String> {
        self.projects
            .iter()
            .filter(|(_, record)| record.history.is_empty())
            .map(|(path, _)| path.clone())
            .collect()
    }

    /// Clear history for one project, returning the entry count removed.
    pub fn clear_history(&mut self, path: &str) -> Result<usize> {
        Ok(self.require_mut(path)?.clear_history())
    }

    /// Clear history for every project, returning the total removed.
    pub fn clear_all_history(&mut self) -> usize {
        self.projects
            .values_mut()
            .map(|record| record.clear_history())
            .sum()
    }

    /// Keep only the last `n` history entries for one project.
    pub fn retain_history(&mut self, path: &str, n: usize) -> Result<usize> {
        Ok(self.require_mut(path)?.retain_last_history(n))
    }

    pub fn enable_mcpjson_server(&mut self, path: &str, name: &str) -> Result<()> {
        self.require_mut(path)?.enable_mcpjson_server(name);
        Ok(())
    }

    pub fn disable_mcpjson_server(&mut self, path: &str, name: &str) -> Result<()> {
        self.require_mut(path)?.disable_mcpjson_server(name);
        Ok(())
    }

    pub fn set_mcp_server(&mut self, path: &str, name: &str, config: Value) -> Result<()> {
        self.require_mut(path)?.set_mcp_server(name, config);
        Ok(())
    }

    pub fn remove_mcp_server(&mut self, path: &str, name: &str) -> Result<bool> {
        Ok(self.require_mut(path)?.remove_mcp_server(name))
    }

    pub fn stats(&self) -> ConfigStats {
        let oauth = self.extra.get("oauthAccount");
        ConfigStats {
            total_projects: self.projects.len(),
            total_history_entries: self
                .projects
                .values()
                .map(|record| record.history_count())
                .sum(),
            total_mcp_servers: self
                .projects
                .values()
                .map(|record| record.mcp_servers.len())
                .sum(),
            num_startups: self
                .extra
                .get("numStartups")
                .and_then(Value::as_u64)
                .unwrap_or(0),
            first_start_time: self
                .extra
                .get("firstStartTime")
                .and_then(Value::as_str)
                .map(str::to_string),
            user_email: oauth
                .and_then(|v| v.get("emailAddress"))
                .and_then(Value::as_str)
                .map(str::to_string),
            organization: oauth
                .and_then(|v| v.get("organizationName"))
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}
