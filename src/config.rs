// src/config.rs

//! Project configuration: registry endpoint and install-path aliases.
//!
//! Loaded from `luman.config.json` at the project root. Every field has a
//! default, so a project without a config file behaves identically to one
//! freshly initialized; the file exists to be overridden, not to gate usage.
//!
//! The aliases drive path resolution for both the installer and the diff
//! generator: registry-namespaced prefixes (`ui/`, `lib/`, `hooks/`) map to
//! the project's component, util, and hook directories.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Config file name at the project root
pub const CONFIG_FILE: &str = "luman.config.json";

/// Registry consulted when the config does not name one
pub const DEFAULT_REGISTRY: &str = "https://registry.luman.dev";

/// Target directories for registry-namespaced path prefixes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Aliases {
    /// Install target for `ui/...` paths
    pub components: String,

    /// Install target for `lib/...` paths
    pub utils: String,

    /// Install target for `hooks/...` paths
    pub hooks: String,
}

impl Default for Aliases {
    fn default() -> Self {
        Self {
            components: "src/components/ui".to_string(),
            utils: "src/lib".to_string(),
            hooks: "src/hooks".to_string(),
        }
    }
}

/// Per-project configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectConfig {
    /// Base URL of the component registry
    pub registry: String,

    pub aliases: Aliases,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            registry: DEFAULT_REGISTRY.to_string(),
            aliases: Aliases::default(),
        }
    }
}

impl ProjectConfig {
    /// Load the configuration for a project root.
    ///
    /// A missing config file yields the defaults; a present but malformed
    /// file is an error (never silently replaced with defaults).
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| Error::IoError(format!("Failed to read {}: {e}", path.display())))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Persist the configuration to the project root.
    pub fn save(&self, root: &Path) -> Result<()> {
        let path = root.join(CONFIG_FILE);
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        fs::write(&path, content + "\n")
            .map_err(|e| Error::IoError(format!("Failed to write {}: {e}", path.display())))
    }

    /// Map a registry-namespaced path to its on-disk location, relative to
    /// the project root.
    ///
    /// Paths outside the known prefixes install as-is relative to the root.
    pub fn target_path(&self, registry_path: &str) -> PathBuf {
        if let Some(rest) = registry_path.strip_prefix("ui/") {
            Path::new(&self.aliases.components).join(rest)
        } else if let Some(rest) = registry_path.strip_prefix("lib/") {
            Path::new(&self.aliases.utils).join(rest)
        } else if let Some(rest) = registry_path.strip_prefix("hooks/") {
            Path::new(&self.aliases.hooks).join(rest)
        } else {
            PathBuf::from(registry_path)
        }
    }
}
