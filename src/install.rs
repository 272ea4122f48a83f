// src/install.rs

//! File writer for resolved registry items.
//!
//! Maps each registry-namespaced file path through the project's alias
//! configuration, writes the body (staged in a temp file and renamed into
//! place), then records the installation in the manifest. The recorded
//! content hash is computed over the freshly written files with the same
//! combined-hash routine the status classifier uses later, so an untouched
//! install always classifies as unchanged.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use crate::hash;
use crate::manifest::ManifestStore;
use crate::registry::{RegistryItem, RegistrySource};

/// Outcome of installing one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledComponent {
    pub name: String,
    pub version: String,
    /// Combined content hash as recorded in the manifest
    pub content_hash: String,
    /// Written file paths, relative to the project root
    pub files: Vec<String>,
}

/// Installer bound to one project root and registry.
pub struct Installer<'a> {
    root: &'a Path,
    config: &'a ProjectConfig,
    source: &'a dyn RegistrySource,
}

impl<'a> Installer<'a> {
    pub fn new(root: &'a Path, config: &'a ProjectConfig, source: &'a dyn RegistrySource) -> Self {
        Self { root, config, source }
    }

    /// Install one resolved item: write its files and upsert the manifest.
    ///
    /// Fetches any file bodies the item does not already carry. Install and
    /// update are the same operation; an existing entry is replaced.
    pub fn install(&self, item: &RegistryItem) -> Result<InstalledComponent> {
        let item = if item.files.iter().any(|f| f.content.is_none()) {
            self.source.fetch_item_files(item)?
        } else {
            item.clone()
        };

        let mut written: Vec<String> = Vec::with_capacity(item.files.len());
        for file in &item.files {
            let content = file.content.as_deref().ok_or_else(|| {
                Error::NotFound(format!(
                    "Registry served no body for '{}' of component '{}'",
                    file.path, item.name
                ))
            })?;

            let rel = self.config.target_path(&file.path);
            let dest = self.root.join(&rel);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::IoError(format!("Failed to create {}: {e}", parent.display()))
                })?;
            }

            let temp_path = dest.with_extension("tmp");
            fs::write(&temp_path, content).map_err(|e| {
                Error::IoError(format!("Failed to write {}: {e}", temp_path.display()))
            })?;
            fs::rename(&temp_path, &dest).map_err(|e| {
                Error::IoError(format!(
                    "Failed to move {} to {}: {e}",
                    temp_path.display(),
                    dest.display()
                ))
            })?;

            debug!("Wrote {}", dest.display());
            written.push(rel.to_string_lossy().into_owned());
        }

        let absolute: Vec<PathBuf> = written.iter().map(|rel| self.root.join(rel)).collect();
        let content_hash = hash::hash_files(&absolute)?;

        ManifestStore::new(self.root).upsert_component(
            &item.name,
            &item.version,
            &content_hash,
            written.clone(),
        )?;

        info!(
            "Installed {} {} ({} file(s))",
            item.name,
            item.version,
            written.len()
        );

        Ok(InstalledComponent {
            name: item.name.clone(),
            version: item.version.clone(),
            content_hash,
            files: written,
        })
    }
}
