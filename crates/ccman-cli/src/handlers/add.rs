use crate::render;
use anyhow::Result;
use ccman_engine::ConfigStore;
use ccman_types::directory_exists;

pub fn handle(store: &ConfigStore, path: &str) -> Result<()> {
    let mut document = store.load()?;

    if !directory_exists(path) {
        render::warning(&format!("directory does not exist: {}", path));
    }

    document.add_project(path)?;
    store.save(&document)?;
    render::success(&format!("Now tracking {}", path));
    Ok(())
}
