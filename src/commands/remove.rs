// src/commands/remove.rs

//! Untrack command

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use luman::ManifestStore;

/// Drop a component from the manifest.
///
/// Installed files stay on disk; removal only forgets the provenance
/// record, it does not uninstall code the project may reference.
pub fn cmd_remove(root: &Path, name: &str) -> Result<()> {
    let store = ManifestStore::new(root);

    let files = store
        .read()
        .context("Failed to read manifest")?
        .and_then(|m| m.component(name).map(|entry| entry.files.clone()))
        .unwrap_or_default();

    if store
        .remove_component(name)
        .with_context(|| format!("Failed to remove '{name}' from the manifest"))?
    {
        info!("Removed '{}' from manifest", name);
        println!("Removed {name} from the manifest");
        if !files.is_empty() {
            println!("Installed files were left in place:");
            for file in &files {
                println!("  {file}");
            }
        }
    } else {
        println!("Component '{name}' is not tracked");
    }
    Ok(())
}
