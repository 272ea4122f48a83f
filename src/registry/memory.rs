// src/registry/memory.rs

//! In-memory registry backed by a plain map.
//!
//! Items are stored fully hydrated (file bodies included), which makes this
//! the fixture of choice for tests and for local catalogs assembled in
//! memory. Lookup semantics match the HTTP client: an unknown name is
//! `Ok(None)` for metadata and `NotFound` for file bodies.

use std::collections::HashMap;

use super::client::RegistrySource;
use super::item::RegistryItem;
use crate::error::{Error, Result};

/// A registry whose entire catalog lives in memory.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    items: HashMap<String, RegistryItem>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: impl IntoIterator<Item = RegistryItem>) -> Self {
        let mut registry = Self::new();
        for item in items {
            registry.insert(item);
        }
        registry
    }

    /// Insert or replace an item under its name.
    pub fn insert(&mut self, item: RegistryItem) {
        self.items.insert(item.name.clone(), item);
    }

    /// Remove an item, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<RegistryItem> {
        self.items.remove(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl RegistrySource for InMemoryRegistry {
    fn fetch_item(&self, name: &str) -> Result<Option<RegistryItem>> {
        Ok(self.items.get(name).cloned())
    }

    fn fetch_file(&self, name: &str, file_path: &str) -> Result<String> {
        self.items
            .get(name)
            .and_then(|item| item.files.iter().find(|f| f.path == file_path))
            .and_then(|f| f.content.clone())
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "File '{file_path}' of component '{name}' is not published"
                ))
            })
    }

    fn fetch_index(&self) -> Result<Vec<RegistryItem>> {
        Ok(self.items.values().cloned().collect())
    }
}
