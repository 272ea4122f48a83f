// src/commands/list.rs

//! Catalog listing command

use anyhow::{Context, Result};
use std::path::Path;

use luman::{ManifestStore, ProjectConfig, RegistrySource};

use super::open_registry;

/// List every component the registry publishes, marking installed ones.
pub fn cmd_list(root: &Path, registry_url: Option<&str>) -> Result<()> {
    let config = ProjectConfig::load(root).context("Failed to load project configuration")?;
    let registry = open_registry(&config, registry_url)?;

    let mut items = registry
        .fetch_index()
        .context("Failed to fetch the registry index")?;
    items.sort_by(|a, b| a.name.cmp(&b.name));

    if items.is_empty() {
        println!("Registry publishes no components");
        return Ok(());
    }

    let manifest = ManifestStore::new(root)
        .read()
        .context("Failed to read manifest")?;

    for item in &items {
        let tag = match manifest.as_ref().and_then(|m| m.component(&item.name)) {
            None => String::new(),
            Some(entry) if entry.version == item.version => " (installed)".to_string(),
            Some(entry) => format!(" (installed {})", entry.version),
        };
        println!("{:<24} {:<10} {}{}", item.name, item.version, item.item_type, tag);
    }
    Ok(())
}
