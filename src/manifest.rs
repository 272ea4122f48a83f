// src/manifest.rs

//! Persisted installation manifest: the source of truth for what was
//! installed where, and from which version.
//!
//! The manifest is a JSON file at `.luman/manifest.json` under the project
//! root. It is read and fully rewritten (never patched) on every mutation,
//! with the replacement staged in a temp file and renamed into place so no
//! reader observes a half-written manifest. Mutations additionally hold an
//! exclusive advisory lock on `.luman/manifest.lock` for the duration of the
//! read-modify-write, so concurrent invocations against the same project
//! serialize instead of racing.
//!
//! A manifest that exists but fails schema validation is a typed hard
//! failure: auto-repair or silent recreation would erase the project's
//! drift-detection history without consent.

use chrono::Utc;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Current manifest schema version; any other value is a hard parse failure
pub const MANIFEST_SCHEMA_VERSION: u32 = 1;

/// Directory under the project root holding the manifest
pub const MANIFEST_DIR: &str = ".luman";

/// Manifest file name within [`MANIFEST_DIR`]
pub const MANIFEST_FILE: &str = "manifest.json";

const MANIFEST_LOCK_FILE: &str = "manifest.lock";

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse manifest: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Manifest schema version mismatch: expected {expected}, found {found}")]
    SchemaVersionMismatch { expected: u32, found: u32 },

    #[error("Failed to write manifest: {0}")]
    WriteError(String),
}

/// Local record of one installed component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    /// Version string that was installed
    pub version: String,

    /// Combined content hash computed at install time
    pub content_hash: String,

    /// When this entry was written (ISO 8601)
    pub installed_at: String,

    /// Best-effort customization flag; set false at install and not
    /// guaranteed live. The status classifier recomputes from hashes
    pub customized: bool,

    /// Installed file paths, relative to the project root
    pub files: Vec<String>,
}

/// The full local installation record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub schema_version: u32,

    /// When the manifest was first created (ISO 8601); provenance only
    pub installed_at: String,

    /// Tool that created the manifest; provenance only
    pub cli_version: String,

    #[serde(default)]
    pub components: BTreeMap<String, ManifestEntry>,
}

impl Manifest {
    /// Create a fresh, empty manifest stamped with the current time.
    pub fn new() -> Self {
        Self {
            schema_version: MANIFEST_SCHEMA_VERSION,
            installed_at: Utc::now().to_rfc3339(),
            cli_version: format!("luman {}", env!("CARGO_PKG_VERSION")),
            components: BTreeMap::new(),
        }
    }

    /// Look up the entry for a component name.
    pub fn component(&self, name: &str) -> Option<&ManifestEntry> {
        self.components.get(name)
    }

    /// Names of all tracked components, in sorted order.
    pub fn component_names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(|k| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}

/// Store managing the manifest file of one project.
pub struct ManifestStore {
    root: PathBuf,
}

impl ManifestStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute path of the manifest file.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_DIR).join(MANIFEST_FILE)
    }

    fn lock_path(&self) -> PathBuf {
        self.root.join(MANIFEST_DIR).join(MANIFEST_LOCK_FILE)
    }

    /// Take an exclusive advisory lock for a read-modify-write sequence.
    ///
    /// The lock is released when the returned handle drops.
    fn lock(&self) -> Result<File, ManifestError> {
        let dir = self.root.join(MANIFEST_DIR);
        fs::create_dir_all(&dir)
            .map_err(|e| ManifestError::WriteError(format!("Failed to create {}: {e}", dir.display())))?;

        let lock_file = File::create(self.lock_path())
            .map_err(|e| ManifestError::WriteError(format!("Failed to open manifest lock: {e}")))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| ManifestError::WriteError(format!("Failed to lock manifest: {e}")))?;
        Ok(lock_file)
    }

    /// Read the persisted manifest.
    ///
    /// Returns `Ok(None)` when no manifest exists; "nothing installed" is a
    /// valid state, not an error. Malformed JSON or a schema version other
    /// than [`MANIFEST_SCHEMA_VERSION`] is a typed failure, never coerced.
    pub fn read(&self) -> Result<Option<Manifest>, ManifestError> {
        let path = self.manifest_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let manifest: Manifest = serde_json::from_str(&content)?;

        if manifest.schema_version != MANIFEST_SCHEMA_VERSION {
            return Err(ManifestError::SchemaVersionMismatch {
                expected: MANIFEST_SCHEMA_VERSION,
                found: manifest.schema_version,
            });
        }

        Ok(Some(manifest))
    }

    /// Persist the full manifest, replacing any existing file in one shot.
    ///
    /// The containing directory is created if absent. The serialized form is
    /// staged in a temp file and renamed over the destination.
    pub fn write(&self, manifest: &Manifest) -> Result<(), ManifestError> {
        let dir = self.root.join(MANIFEST_DIR);
        fs::create_dir_all(&dir)
            .map_err(|e| ManifestError::WriteError(format!("Failed to create {}: {e}", dir.display())))?;

        let content = serde_json::to_string_pretty(manifest)
            .map_err(|e| ManifestError::WriteError(format!("Failed to serialize manifest: {e}")))?;

        let path = self.manifest_path();
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, content)
            .map_err(|e| ManifestError::WriteError(format!("Failed to write {}: {e}", temp_path.display())))?;
        fs::rename(&temp_path, &path).map_err(|e| {
            ManifestError::WriteError(format!(
                "Failed to move {} to {}: {e}",
                temp_path.display(),
                path.display()
            ))
        })?;

        debug!("Wrote manifest with {} component(s)", manifest.components.len());
        Ok(())
    }

    /// Create and persist a fresh, empty manifest.
    pub fn initialize(&self) -> Result<Manifest, ManifestError> {
        let _lock = self.lock()?;
        let manifest = Manifest::new();
        self.write(&manifest)?;
        Ok(manifest)
    }

    /// Insert or replace the entry for `name`.
    ///
    /// Initializes a manifest implicitly when none exists yet; install and
    /// update both converge to this one mutation. The entry is written with
    /// `customized: false` and a fresh timestamp.
    pub fn upsert_component(
        &self,
        name: &str,
        version: &str,
        content_hash: &str,
        files: Vec<String>,
    ) -> Result<Manifest, ManifestError> {
        let _lock = self.lock()?;
        let mut manifest = self.read()?.unwrap_or_default();
        manifest.components.insert(
            name.to_string(),
            ManifestEntry {
                version: version.to_string(),
                content_hash: content_hash.to_string(),
                installed_at: Utc::now().to_rfc3339(),
                customized: false,
                files,
            },
        );
        self.write(&manifest)?;
        Ok(manifest)
    }

    /// Delete the entry for `name` and rewrite.
    ///
    /// Returns `false` without touching disk when the manifest or the entry
    /// does not exist.
    pub fn remove_component(&self, name: &str) -> Result<bool, ManifestError> {
        let _lock = self.lock()?;
        let Some(mut manifest) = self.read()? else {
            return Ok(false);
        };
        if manifest.components.remove(name).is_none() {
            return Ok(false);
        }
        self.write(&manifest)?;
        Ok(true)
    }
}
