// src/commands/update.rs

//! Component update command

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use luman::{
    generate_diff, version, ComponentStatus, Installer, ManifestStore, ProjectConfig,
    RegistryItem, RegistrySource, StatusClassifier, NO_CHANGES,
};

use super::open_registry;

/// Bring components up to the registry's current version.
///
/// With no names, every tracked component is considered. A customized
/// component refuses to update unless `force` is set; the diff is printed
/// before any destructive overwrite either way.
pub fn cmd_update(
    root: &Path,
    registry_url: Option<&str>,
    names: &[String],
    force: bool,
    dry_run: bool,
) -> Result<()> {
    let config = ProjectConfig::load(root).context("Failed to load project configuration")?;
    let registry = open_registry(&config, registry_url)?;

    let targets: Vec<String> = if names.is_empty() {
        let manifest = ManifestStore::new(root)
            .read()
            .context("Failed to read manifest")?;
        manifest
            .map(|m| m.component_names().map(str::to_string).collect())
            .unwrap_or_default()
    } else {
        names.to_vec()
    };

    if targets.is_empty() {
        println!("Nothing to update");
        return Ok(());
    }

    let classifier = StatusClassifier::with_registry(root, &registry);
    let installer = Installer::new(root, &config, &registry);

    let mut updated = 0usize;
    for name in &targets {
        let status = classifier
            .check_component(name)
            .with_context(|| format!("Failed to check status of '{name}'"))?;

        let installed_version = match &status.status {
            ComponentStatus::Untracked => {
                println!("{name}: not tracked; use 'luman add {name}' to install it");
                continue;
            }
            ComponentStatus::Unchanged { version } => {
                println!("{name}: already up to date ({version})");
                continue;
            }
            ComponentStatus::Customized { .. } if !force => {
                println!("{name}: locally customized, refusing to overwrite (use --force)");
                show_diff(root, &config, &registry, name)?;
                continue;
            }
            ComponentStatus::Customized { version } => version.clone(),
            ComponentStatus::Outdated {
                installed_version, ..
            } => installed_version.clone(),
            ComponentStatus::Missing => {
                println!("{name}: installed files are missing, reinstalling");
                String::new()
            }
        };

        let Some(item) = registry
            .fetch_item(name)
            .with_context(|| format!("Failed to fetch '{name}' from the registry"))?
        else {
            println!("{name}: no longer published in the registry, skipping");
            continue;
        };
        let item = registry
            .fetch_item_files(&item)
            .with_context(|| format!("Failed to fetch file bodies for '{name}'"))?;

        // The diff is shown before any overwrite of drifted or customized
        // files, and is the entire output for a dry run.
        let diff = generate_diff(root, &config, &item)
            .with_context(|| format!("Failed to generate diff for '{name}'"))?;
        if diff != NO_CHANGES {
            println!("{diff}\n");
        }
        if dry_run {
            println!("{name}: would update to {} (dry run)", item.version);
            continue;
        }

        let result = installer
            .install(&item)
            .with_context(|| format!("Failed to update '{name}'"))?;
        info!("Updated {} to {}", name, result.version);

        if installed_version.is_empty() {
            println!("{name}: reinstalled {}", result.version);
        } else {
            println!("{name}: updated {} -> {}", installed_version, result.version);
            print_changelog(&item, &installed_version);
        }
        updated += 1;
    }

    println!("\n{updated} component(s) updated");
    Ok(())
}

fn show_diff(
    root: &Path,
    config: &ProjectConfig,
    registry: &dyn RegistrySource,
    name: &str,
) -> Result<()> {
    let Some(item) = registry.fetch_item(name)? else {
        return Ok(());
    };
    let item = registry.fetch_item_files(&item)?;
    let diff = generate_diff(root, config, &item)?;
    println!("{diff}");
    Ok(())
}

/// Print the changelog entries published after the previously installed
/// version, newest first as the registry serves them.
fn print_changelog(item: &RegistryItem, installed_version: &str) {
    for entry in &item.changelog {
        if !version::is_newer(&entry.version, installed_version) {
            continue;
        }
        println!("  {} ({})", entry.version, entry.date);
        for change in &entry.changes {
            println!("    - {change}");
        }
    }
}
