// src/registry/item.rs

//! Registry wire-format data structures.
//!
//! These types mirror the JSON the registry serves: per-component metadata at
//! `components/{name}.json`, raw file bodies at `components/{name}/{path}`,
//! and the catalog listing at `index.json`. Field names are camelCase on the
//! wire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a registry item.
///
/// Informs the target install path only; resolution logic ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// A UI component (installs under the components alias)
    #[default]
    Ui,
    /// A composed block of several components
    Block,
    /// A full page scaffold
    Page,
    /// A reusable hook (installs under the hooks alias)
    Hook,
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ui => write!(f, "ui"),
            Self::Block => write!(f, "block"),
            Self::Page => write!(f, "page"),
            Self::Hook => write!(f, "hook"),
        }
    }
}

/// One distributable source file of a registry item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistryFile {
    /// Registry-namespaced relative path (e.g. `ui/button.tsx`)
    pub path: String,

    /// File role as published by the registry
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,

    /// File body; `None` until fetched from the registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// One published version in an item's changelog, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogEntry {
    pub version: String,
    pub date: String,
    #[serde(default)]
    pub changes: Vec<String>,
}

/// A named, versioned unit of distributable code.
///
/// Published externally; read-only from this crate's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistryItem {
    /// Unique name within the registry
    pub name: String,

    #[serde(rename = "type", default)]
    pub item_type: ItemType,

    #[serde(default)]
    pub files: Vec<RegistryFile>,

    /// External package names; consumed by an external installer, not here
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Names of other registry items this one requires: the resolution
    /// graph's edges
    #[serde(default)]
    pub registry_dependencies: Vec<String>,

    /// Semantic version string `MAJOR.MINOR.PATCH`
    pub version: String,

    /// SHA-256 hex digest over the item's sorted file contents
    #[serde(default)]
    pub content_hash: String,

    /// Release history, newest first
    #[serde(default)]
    pub changelog: Vec<ChangelogEntry>,
}

/// Catalog listing served at `index.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryIndex {
    pub components: Vec<RegistryItem>,
}
