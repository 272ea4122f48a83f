// src/commands/status.rs

//! Status reporting command

use anyhow::{Context, Result};
use std::path::Path;

use luman::{
    ComponentStatus, FileState, FileStatus, ProjectConfig, StatusClassifier, StatusResult,
};

use super::open_registry;

/// Classify one or all tracked components and render the results.
pub fn cmd_status(
    root: &Path,
    registry_url: Option<&str>,
    name: Option<&str>,
    offline: bool,
) -> Result<()> {
    let config = ProjectConfig::load(root).context("Failed to load project configuration")?;

    let registry = if offline {
        None
    } else {
        Some(open_registry(&config, registry_url)?)
    };
    let classifier = match &registry {
        Some(r) => StatusClassifier::with_registry(root, r),
        None => StatusClassifier::new(root),
    };

    let results = match name {
        Some(n) => vec![
            classifier
                .check_component(n)
                .with_context(|| format!("Failed to check status of '{n}'"))?,
        ],
        None => classifier.check_all().context("Failed to check component status")?,
    };

    if results.is_empty() {
        println!("No components tracked in this project");
        return Ok(());
    }

    for result in &results {
        render(result);
    }
    Ok(())
}

fn render(result: &StatusResult) {
    match &result.status {
        ComponentStatus::Unchanged { version } => {
            println!("{:<24} {} up to date", result.name, version);
        }
        ComponentStatus::Outdated {
            installed_version,
            latest_version,
        } => {
            println!(
                "{:<24} {} -> {} available",
                result.name, installed_version, latest_version
            );
        }
        ComponentStatus::Customized { version } => {
            println!("{:<24} {} locally customized", result.name, version);
        }
        ComponentStatus::Missing => {
            println!("{:<24} installed files are missing", result.name);
        }
        ComponentStatus::Untracked => {
            println!("{:<24} not tracked by this project", result.name);
        }
    }

    // Per-file detail for anything that is not clean.
    if !matches!(
        result.status,
        ComponentStatus::Unchanged { .. } | ComponentStatus::Untracked
    ) {
        for file in &result.files {
            println!("    {} {}", marker(file), file.path);
        }
    }
}

fn marker(file: &FileStatus) -> &'static str {
    match file.state {
        FileState::Ok => " ",
        FileState::Modified => "M",
        FileState::Missing => "!",
    }
}
