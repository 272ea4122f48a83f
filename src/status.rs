// src/status.rs

//! Status classification for installed components.
//!
//! The classifier compares three data sources (the manifest, the live
//! filesystem, and optionally the registry's current published version),
//! each of which may be stale, missing, or unreachable, and reduces them to
//! one of five mutually exclusive states. Status is recomputed fresh on every
//! call; there are no incremental transitions.
//!
//! The load-bearing policy is the offline-safe default: a stale or
//! unreachable registry must never produce `outdated`, because the update
//! flow downstream can destructively overwrite customizations. Silence
//! biases toward the no-op state.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;
use crate::hash;
use crate::manifest::{ManifestEntry, ManifestStore};
use crate::registry::RegistrySource;

/// Whole-component classification, exactly one per check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentStatus {
    /// Name has no manifest entry: never installed via this tool
    Untracked,

    /// Tracked, but none of the recorded files survive on disk and the hash
    /// comparison gave no customization signal
    Missing,

    /// Local files diverge from the hash recorded at install time
    Customized { version: String },

    /// Local files match the installed version, but the registry now serves
    /// a different one
    Outdated {
        installed_version: String,
        latest_version: String,
    },

    /// Local files match, and the registry (if reachable) agrees on version
    Unchanged { version: String },
}

impl ComponentStatus {
    /// Short machine-friendly label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Untracked => "untracked",
            Self::Missing => "missing",
            Self::Customized { .. } => "customized",
            Self::Outdated { .. } => "outdated",
            Self::Unchanged { .. } => "unchanged",
        }
    }
}

/// Per-file state within a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    Ok,
    Modified,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    /// Path relative to the project root, as recorded in the manifest
    pub path: String,
    pub state: FileState,
}

/// Classification output for one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusResult {
    pub name: String,
    pub status: ComponentStatus,
    /// Per-file detail; empty for `untracked`
    pub files: Vec<FileStatus>,
}

/// Classifier over one project root, optionally consulting a registry.
pub struct StatusClassifier<'a> {
    root: &'a Path,
    registry: Option<&'a dyn RegistrySource>,
}

impl<'a> StatusClassifier<'a> {
    /// Classifier without a registry: version staleness is never reported.
    pub fn new(root: &'a Path) -> Self {
        Self { root, registry: None }
    }

    /// Classifier that also checks the registry's current published version.
    pub fn with_registry(root: &'a Path, registry: &'a dyn RegistrySource) -> Self {
        Self {
            root,
            registry: Some(registry),
        }
    }

    /// Classify a single component by name.
    ///
    /// Errors only on truly exceptional conditions: a malformed manifest, or
    /// a file vanishing between the existence check and hashing.
    pub fn check_component(&self, name: &str) -> Result<StatusResult> {
        let store = ManifestStore::new(self.root);
        let manifest = store.read()?;

        let Some(entry) = manifest.as_ref().and_then(|m| m.component(name)) else {
            return Ok(StatusResult {
                name: name.to_string(),
                status: ComponentStatus::Untracked,
                files: Vec::new(),
            });
        };

        self.classify_entry(name, entry)
    }

    /// Classify every component recorded in the manifest, independently.
    ///
    /// Returns an empty list when no manifest exists; nothing installed is
    /// a valid, non-exceptional state.
    pub fn check_all(&self) -> Result<Vec<StatusResult>> {
        let store = ManifestStore::new(self.root);
        let Some(manifest) = store.read()? else {
            return Ok(Vec::new());
        };

        let mut results = Vec::with_capacity(manifest.components.len());
        for (name, entry) in &manifest.components {
            results.push(self.classify_entry(name, entry)?);
        }
        Ok(results)
    }

    fn classify_entry(&self, name: &str, entry: &ManifestEntry) -> Result<StatusResult> {
        // Per-file existence survey; returned regardless of the final
        // whole-component state.
        let mut files = Vec::with_capacity(entry.files.len());
        let mut existing: Vec<PathBuf> = Vec::new();
        for rel in &entry.files {
            let on_disk = self.root.join(rel);
            if on_disk.exists() {
                files.push(FileStatus {
                    path: rel.clone(),
                    state: FileState::Ok,
                });
                existing.push(on_disk);
            } else {
                files.push(FileStatus {
                    path: rel.clone(),
                    state: FileState::Missing,
                });
            }
        }

        // An entry that records no files has nothing to hash or compare.
        if entry.files.is_empty() {
            return Ok(StatusResult {
                name: name.to_string(),
                status: ComponentStatus::Missing,
                files,
            });
        }

        // Empty surviving subset hashes to the empty string; the hasher is
        // never invoked with zero paths. A non-empty stored hash can never
        // equal it, so a fully deleted component classifies as customized.
        let current_hash = if existing.is_empty() {
            String::new()
        } else {
            hash::hash_files(&existing)?
        };

        if current_hash != entry.content_hash {
            for file in files.iter_mut() {
                if file.state == FileState::Ok {
                    file.state = FileState::Modified;
                }
            }
            return Ok(StatusResult {
                name: name.to_string(),
                status: ComponentStatus::Customized {
                    version: entry.version.clone(),
                },
                files,
            });
        }

        if existing.is_empty() {
            return Ok(StatusResult {
                name: name.to_string(),
                status: ComponentStatus::Missing,
                files,
            });
        }

        // Only a successful fetch may claim outdated; lookup and network
        // failures fall through to unchanged.
        if let Some(registry) = self.registry {
            match registry.fetch_item(name) {
                Ok(Some(item)) if item.version != entry.version => {
                    return Ok(StatusResult {
                        name: name.to_string(),
                        status: ComponentStatus::Outdated {
                            installed_version: entry.version.clone(),
                            latest_version: item.version,
                        },
                        files,
                    });
                }
                Ok(_) => {}
                Err(e) => {
                    debug!("Registry check for '{}' failed: {}, treating as unchanged", name, e);
                }
            }
        }

        Ok(StatusResult {
            name: name.to_string(),
            status: ComponentStatus::Unchanged {
                version: entry.version.clone(),
            },
            files,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn install_fixture(root: &Path, name: &str, version: &str, files: &[(&str, &str)]) {
        let mut rel_paths = Vec::new();
        let mut abs_paths = Vec::new();
        for (rel, content) in files {
            let abs = root.join(rel);
            fs::create_dir_all(abs.parent().unwrap()).unwrap();
            fs::write(&abs, content).unwrap();
            rel_paths.push(rel.to_string());
            abs_paths.push(abs);
        }
        let hash = hash::hash_files(&abs_paths).unwrap();
        ManifestStore::new(root)
            .upsert_component(name, version, &hash, rel_paths)
            .unwrap();
    }

    #[test]
    fn test_untracked_without_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let classifier = StatusClassifier::new(dir.path());
        let result = classifier.check_component("button").unwrap();
        assert_eq!(result.status, ComponentStatus::Untracked);
        assert!(result.files.is_empty());
    }

    #[test]
    fn test_untracked_iff_no_entry() {
        let dir = tempfile::tempdir().unwrap();
        install_fixture(dir.path(), "button", "1.0.0", &[("ui/button.tsx", "b\n")]);

        let classifier = StatusClassifier::new(dir.path());
        assert_ne!(
            classifier.check_component("button").unwrap().status,
            ComponentStatus::Untracked
        );
        assert_eq!(
            classifier.check_component("dialog").unwrap().status,
            ComponentStatus::Untracked
        );
    }

    #[test]
    fn test_unchanged_when_hash_matches_and_no_registry() {
        let dir = tempfile::tempdir().unwrap();
        install_fixture(dir.path(), "button", "1.0.0", &[("ui/button.tsx", "b\n")]);

        let result = StatusClassifier::new(dir.path())
            .check_component("button")
            .unwrap();
        assert_eq!(
            result.status,
            ComponentStatus::Unchanged {
                version: "1.0.0".to_string()
            }
        );
        assert_eq!(result.files[0].state, FileState::Ok);
    }

    #[test]
    fn test_customized_relabels_existing_files_modified() {
        let dir = tempfile::tempdir().unwrap();
        install_fixture(
            dir.path(),
            "card",
            "1.0.0",
            &[("ui/card.tsx", "original\n"), ("ui/card-header.tsx", "header\n")],
        );
        fs::write(dir.path().join("ui/card.tsx"), "hand edited\n").unwrap();

        let result = StatusClassifier::new(dir.path())
            .check_component("card")
            .unwrap();
        assert_eq!(
            result.status,
            ComponentStatus::Customized {
                version: "1.0.0".to_string()
            }
        );
        // Every surviving file is relabeled, not just the edited one; the
        // combined hash cannot attribute the drift to a single file.
        assert!(result.files.iter().all(|f| f.state == FileState::Modified));
    }

    #[test]
    fn test_deleted_files_classify_customized_with_missing_detail() {
        let dir = tempfile::tempdir().unwrap();
        install_fixture(dir.path(), "dialog", "1.0.0", &[("ui/dialog.tsx", "d\n")]);
        fs::remove_file(dir.path().join("ui/dialog.tsx")).unwrap();

        let result = StatusClassifier::new(dir.path())
            .check_component("dialog")
            .unwrap();
        // Empty-survivor hash can never equal the non-empty stored hash.
        assert_eq!(
            result.status,
            ComponentStatus::Customized {
                version: "1.0.0".to_string()
            }
        );
        assert_eq!(result.files.len(), 1);
        assert_eq!(result.files[0].state, FileState::Missing);
    }

    #[test]
    fn test_check_all_without_manifest_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let results = StatusClassifier::new(dir.path()).check_all().unwrap();
        assert!(results.is_empty());
    }
}
