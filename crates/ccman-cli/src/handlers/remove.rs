use crate::render;
use anyhow::Result;
use ccman_engine::ConfigStore;
use std::collections::BTreeSet;

/// Removal strategies all reduce to one explicit path set, assembled here
/// and applied to the in-memory document in a single pass.
pub fn handle(
    store: &ConfigStore,
    paths: Vec<String>,
    missing: bool,
    empty_history: bool,
    yes: bool,
) -> Result<()> {
    let mut document = store.load()?;

    let mut selection: BTreeSet<String> = BTreeSet::new();
    for path in paths {
        if document.project(&path).is_none() {
            render::warning(&format!("not tracked, skipping: {}", path));
        } else {
            selection.insert(path);
        }
    }
    if missing {
        selection.extend(document.missing_project_paths());
    }
    if empty_history {
        selection.extend(document.empty_history_paths());
    }

    if selection.is_empty() {
        println!("Nothing to remove.");
        return Ok(());
    }

    if !yes {
        println!("Would remove {} project(s):", selection.len());
        for path in &selection {
            println!("  {}", path);
        }
        render::note("Re-run with --yes to apply.");
        return Ok(());
    }

    let removed = document.remove_projects(selection.iter().map(String::as_str));
    store.save(&document)?;
    render::success(&format!("Removed {} project(s)", removed));
    Ok(())
}
