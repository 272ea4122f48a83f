// tests/common/mod.rs

//! Shared fixtures for integration tests.

use std::path::Path;

use luman::{
    Error, InMemoryRegistry, Installer, ProjectConfig, RegistryFile, RegistryItem, RegistrySource,
    Result,
};

/// Build a hydrated registry item: files carry their bodies.
pub fn item(
    name: &str,
    version: &str,
    registry_deps: &[&str],
    files: &[(&str, &str)],
) -> RegistryItem {
    RegistryItem {
        name: name.to_string(),
        item_type: Default::default(),
        files: files
            .iter()
            .map(|(path, content)| RegistryFile {
                path: path.to_string(),
                file_type: None,
                content: Some(content.to_string()),
            })
            .collect(),
        dependencies: Vec::new(),
        registry_dependencies: registry_deps.iter().map(|d| d.to_string()).collect(),
        version: version.to_string(),
        content_hash: String::new(),
        changelog: Vec::new(),
    }
}

/// Registry whose every call fails, simulating an unreachable endpoint.
pub struct UnreachableRegistry;

impl RegistrySource for UnreachableRegistry {
    fn fetch_item(&self, name: &str) -> Result<Option<RegistryItem>> {
        Err(Error::DownloadError(format!(
            "Failed to fetch component '{name}': connection refused"
        )))
    }

    fn fetch_file(&self, name: &str, file_path: &str) -> Result<String> {
        Err(Error::DownloadError(format!(
            "Failed to fetch '{file_path}' of component '{name}': connection refused"
        )))
    }

    fn fetch_index(&self) -> Result<Vec<RegistryItem>> {
        Err(Error::DownloadError(
            "Failed to fetch registry index: connection refused".to_string(),
        ))
    }
}

/// Install `component` into `root` from an in-memory registry holding it.
pub fn install_from(
    root: &Path,
    registry: &InMemoryRegistry,
    config: &ProjectConfig,
    component: &RegistryItem,
) {
    Installer::new(root, config, registry)
        .install(component)
        .expect("fixture install failed");
}
