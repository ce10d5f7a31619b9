use serde_json::Value;

/// Outcome of structural validation of a candidate document.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid,
    Invalid(Vec<String>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn reasons(&self) -> &[String] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid(reasons) => reasons,
        }
    }
}

/// Check that a candidate document is shape-conformant before it is allowed
/// to replace the live file.
///
/// Purely structural: never touches the filesystem, collects every problem
/// instead of stopping at the first, and permits unknown fields so newer
/// Claude Code versions keep working.
pub fn validate(candidate: &Value) -> ValidationResult {
    let mut reasons = Vec::new();

    let Some(root) = candidate.as_object() else {
        reasons.push("top-level structure must be a JSON object".to_string());
        return ValidationResult::Invalid(reasons);
    };

    if let Some(projects) = root.get("projects") {
        match projects.as_object() {
            Some(projects) => {
                for (path, entry) in projects {
                    if path.is_empty() {
                        reasons.push("project key must be a non-empty path".to_string());
                    }
                    validate_project(path, entry, &mut reasons);
                }
            }
            None => reasons.push(format!(
                "'projects' must be an object, got {}",
                type_name(projects)
            )),
        }
    }

    if reasons.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(reasons)
    }
}

fn validate_project(path: &str, entry: &Value, reasons: &mut Vec<String>) {
    let Some(entry) = entry.as_object() else {
        reasons.push(format!(
            "project '{}' must be an object, got {}",
            path,
            type_name(entry)
        ));
        return;
    };

    if let Some(history) = entry.get("history")
        && !history.is_array()
    {
        reasons.push(format!(
            "project '{}': 'history' must be an array, got {}",
            path,
            type_name(history)
        ));
    }

    if let Some(servers) = entry.get("mcpServers")
        && !servers.is_object()
    {
        reasons.push(format!(
            "project '{}': 'mcpServers' must be an object, got {}",
            path,
            type_name(servers)
        ));
    }

    for field in [
        "allowedTools",
        "enabledMcpjsonServers",
        "disabledMcpjsonServers",
    ] {
        if let Some(value) = entry.get(field) {
            let all_strings = value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string));
            if !all_strings {
                reasons.push(format!(
                    "project '{}': '{}' must be an array of strings",
                    path, field
                ));
            }
        }
    }

    // A server name in both toggle lists is contradictory state.
    if let (Some(enabled), Some(disabled)) = (
        entry.get("enabledMcpjsonServers").and_then(Value::as_array),
        entry.get("disabledMcpjsonServers").and_then(Value::as_array),
    ) {
        for name in enabled {
            if disabled.contains(name) {
                reasons.push(format!(
                    "project '{}': server {} is both enabled and disabled",
                    path, name
                ));
            }
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
