// src/commands/diff.rs

//! Diff command

use anyhow::{bail, Context, Result};
use std::path::Path;

use luman::{generate_diff, ProjectConfig, RegistrySource};

use super::open_registry;

/// Print a line diff between local files and the registry's current version.
pub fn cmd_diff(root: &Path, registry_url: Option<&str>, name: &str) -> Result<()> {
    let config = ProjectConfig::load(root).context("Failed to load project configuration")?;
    let registry = open_registry(&config, registry_url)?;

    let Some(item) = registry
        .fetch_item(name)
        .with_context(|| format!("Failed to fetch '{name}' from the registry"))?
    else {
        bail!("Component '{name}' is not published in the registry");
    };
    let item = registry
        .fetch_item_files(&item)
        .with_context(|| format!("Failed to fetch file bodies for '{name}'"))?;

    let diff = generate_diff(root, &config, &item)
        .with_context(|| format!("Failed to generate diff for '{name}'"))?;
    println!("{diff}");
    Ok(())
}
