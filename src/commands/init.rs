// src/commands/init.rs

//! Project initialization command

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use luman::{ManifestStore, ProjectConfig, CONFIG_FILE};

/// Write a default project configuration and initialize the manifest.
///
/// Existing files are left untouched; init never clobbers.
pub fn cmd_init(root: &Path) -> Result<()> {
    let config_path = root.join(CONFIG_FILE);
    if config_path.exists() {
        println!("{} already exists, leaving it untouched", config_path.display());
    } else {
        ProjectConfig::default()
            .save(root)
            .context("Failed to write project configuration")?;
        info!("Wrote default configuration to {}", config_path.display());
        println!("Wrote {}", config_path.display());
    }

    let store = ManifestStore::new(root);
    if store
        .read()
        .context("Failed to read existing manifest")?
        .is_some()
    {
        println!("Component manifest already present");
    } else {
        store.initialize().context("Failed to initialize manifest")?;
        println!("Initialized component manifest at {}", store.manifest_path().display());
    }

    Ok(())
}
