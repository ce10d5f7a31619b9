use crate::render;
use anyhow::{Result, bail};
use ccman_engine::ConfigStore;
use std::fs;

pub fn list(store: &ConfigStore) -> Result<()> {
    let snapshots = store.backups().list()?;

    if snapshots.is_empty() {
        println!("No backups in {}", store.backups().dir().display());
        return Ok(());
    }

    println!("{:<45} {:<20} SIZE", "FILE", "CREATED");
    println!("{}", "-".repeat(80));
    for snapshot in &snapshots {
        let size = fs::metadata(snapshot.path()).map(|m| m.len()).unwrap_or(0);
        println!(
            "{:<45} {:<20} {}",
            snapshot.file_name(),
            snapshot.created_at().format("%Y-%m-%d %H:%M:%S"),
            render::format_size(size)
        );
    }
    Ok(())
}

pub fn create(store: &ConfigStore) -> Result<()> {
    let path = store.config_path();
    if !path.exists() {
        bail!("No configuration file to back up at {}", path.display());
    }

    let bytes = fs::read(path)?;
    let snapshot = store.backups().create(&bytes)?;
    render::success(&format!("Created backup {}", snapshot.file_name()));
    Ok(())
}

pub fn restore(store: &ConfigStore, file_name: &str) -> Result<()> {
    let snapshot = store.backups().find(file_name)?;
    let document = store.restore_from_backup(&snapshot)?;
    render::success(&format!(
        "Restored {} ({} projects)",
        snapshot.file_name(),
        document.projects.len()
    ));
    Ok(())
}

pub fn prune(store: &ConfigStore) -> Result<()> {
    store.backups().prune(store.backups().retain());
    let remaining = store.backups().list()?.len();
    render::success(&format!("{} backup(s) remain", remaining));
    Ok(())
}
