use serde_json::{Value, json};

/// A configuration document resembling a real `~/.claude.json`: a few
/// projects with history and MCP servers plus top-level pass-through fields.
pub fn sample_config() -> Value {
    json!({
        "numStartups": 57,
        "firstStartTime": "2025-02-01T08:30:00Z",
        "autoUpdaterStatus": "enabled",
        "oauthAccount": {
            "emailAddress": "dev@example.com",
            "organizationName": "Example Org"
        },
        "projects": {
            "/home/dev/alpha": {
                "allowedTools": ["Bash(cargo:*)", "Edit"],
                "history": [
                    { "display": "cargo build", "pastedContents": {} },
                    { "display": "cargo test" },
                    { "display": "git push origin main" }
                ],
                "mcpServers": {
                    "github": { "command": "gh-mcp", "args": ["--stdio"] }
                },
                "enabledMcpjsonServers": ["linear"],
                "hasTrustDialogAccepted": true,
                "projectOnboardingSeenCount": 2
            },
            "/home/dev/beta": {
                "history": [ { "display": "npm install" } ]
            },
            "/home/dev/stale": {
                "history": []
            }
        }
    })
}

/// A document with a project of `count` history entries, displays "cmd-0"
/// through "cmd-{count-1}" in chronological order.
pub fn config_with_history(path: &str, count: usize) -> Value {
    let history: Vec<Value> = (0..count)
        .map(|i| json!({ "display": format!("cmd-{}", i) }))
        .collect();
    let mut document = json!({ "projects": {} });
    document["projects"][path] = json!({ "history": history });
    document
}
