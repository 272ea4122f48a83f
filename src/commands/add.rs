// src/commands/add.rs

//! Component installation command

use anyhow::{bail, Context, Result};
use indicatif::ProgressBar;
use std::path::Path;
use std::time::Duration;
use tracing::info;

use luman::{ComponentStatus, DependencyResolver, Installer, ProjectConfig, StatusClassifier};

use super::open_registry;

/// Resolve the requested components and install the full dependency set.
///
/// Components that are already tracked and locally customized are skipped
/// unless `overwrite` is set; add must not silently destroy local edits.
pub fn cmd_add(
    root: &Path,
    registry_url: Option<&str>,
    names: &[String],
    overwrite: bool,
) -> Result<()> {
    let config = ProjectConfig::load(root).context("Failed to load project configuration")?;
    let registry = open_registry(&config, registry_url)?;

    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Resolving {} component(s)...", names.len()));

    let resolver = DependencyResolver::new(&registry);
    let resolved = resolver.resolve(names);

    spinner.finish_and_clear();

    if resolved.is_empty() {
        bail!("None of the requested components were found in the registry");
    }
    for name in names {
        if !resolved.iter().any(|item| item.name == *name) {
            println!("Component '{}' not found in registry, skipping", name);
        }
    }
    info!("Resolved {} component(s) to install", resolved.len());

    let classifier = StatusClassifier::new(root);
    let installer = Installer::new(root, &config, &registry);

    let mut installed = 0usize;
    let mut skipped = 0usize;
    for item in &resolved {
        let status = classifier
            .check_component(&item.name)
            .with_context(|| format!("Failed to check status of '{}'", item.name))?;

        if matches!(status.status, ComponentStatus::Customized { .. }) && !overwrite {
            println!(
                "Skipping {} (locally customized; use --overwrite to replace)",
                item.name
            );
            skipped += 1;
            continue;
        }

        let result = installer
            .install(item)
            .with_context(|| format!("Failed to install '{}'", item.name))?;
        println!(
            "Added {} {} ({} file(s))",
            result.name,
            result.version,
            result.files.len()
        );
        installed += 1;
    }

    if skipped > 0 {
        println!("\n{installed} component(s) installed, {skipped} skipped");
    } else {
        println!("\n{installed} component(s) installed");
    }
    Ok(())
}
