use crate::render;
use anyhow::{Result, bail};
use ccman_engine::ConfigStore;

pub fn clear(store: &ConfigStore, paths: Vec<String>, all: bool) -> Result<()> {
    let mut document = store.load()?;

    let cleared = if all {
        document.clear_all_history()
    } else {
        if paths.is_empty() {
            bail!("Specify project paths or --all");
        }
        let mut total = 0;
        for path in &paths {
            total += document.clear_history(path)?;
        }
        total
    };

    if cleared == 0 {
        println!("No history entries to clear.");
        return Ok(());
    }

    store.save(&document)?;
    render::success(&format!("Cleared {} history entries", cleared));
    Ok(())
}

pub fn retain(store: &ConfigStore, n: usize, paths: Vec<String>, all: bool) -> Result<()> {
    let mut document = store.load()?;

    let targets: Vec<String> = if all {
        document.projects.keys().cloned().collect()
    } else {
        if paths.is_empty() {
            bail!("Specify project paths or --all");
        }
        paths
    };

    let mut dropped = 0;
    for path in &targets {
        dropped += document.retain_history(path, n)?;
    }

    if dropped == 0 {
        println!("All targeted projects already have {} or fewer entries.", n);
        return Ok(());
    }

    store.save(&document)?;
    render::success(&format!(
        "Dropped {} history entries, keeping the last {} per project",
        dropped, n
    ));
    Ok(())
}
