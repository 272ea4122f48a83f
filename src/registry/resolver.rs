// src/registry/resolver.rs

//! Recursive dependency resolution over the registry graph.
//!
//! Resolution walks `registryDependencies` edges depth-first from one or more
//! requested roots and produces a flattened, deduplicated installation set in
//! traversal order (parent before children). A single visited set is shared
//! across all roots, so it doubles as the cycle guard and the deduplication
//! mechanism: a name already seen is never fetched or walked again, and a
//! cycle simply terminates instead of erroring.
//!
//! Missing or unfetchable dependency branches are abandoned with a log line
//! rather than failing the whole resolution; a renamed optional dependency
//! must not break installs of everything that once referenced it.

use std::collections::HashSet;
use tracing::{debug, warn};

use super::client::RegistrySource;
use super::item::RegistryItem;

/// Resolver over a registry's dependency graph.
pub struct DependencyResolver<'a> {
    source: &'a dyn RegistrySource,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(source: &'a dyn RegistrySource) -> Self {
        Self { source }
    }

    /// Resolve one root name. See [`resolve`](Self::resolve).
    pub fn resolve_one(&self, root: &str) -> Vec<RegistryItem> {
        self.resolve(&[root])
    }

    /// Resolve the given roots into a flattened installation set.
    ///
    /// The output holds each reachable item exactly once, in depth-first
    /// traversal order with repeated dependencies pruned at first
    /// occurrence. Callers that need a stable display order must re-sort.
    ///
    /// Resolution itself never fails: names the registry does not publish and
    /// branches whose fetch errors out are skipped.
    pub fn resolve<S: AsRef<str>>(&self, roots: &[S]) -> Vec<RegistryItem> {
        let mut visited: HashSet<String> = HashSet::new();
        let mut resolved: Vec<RegistryItem> = Vec::new();

        // Explicit worklist; roots reversed so the first requested name is
        // walked first, and children reversed below for the same reason.
        let mut stack: Vec<String> = roots
            .iter()
            .rev()
            .map(|s| s.as_ref().to_string())
            .collect();

        while let Some(name) = stack.pop() {
            if !visited.insert(name.clone()) {
                debug!("'{}' already resolved, pruning", name);
                continue;
            }

            match self.source.fetch_item(&name) {
                Ok(Some(item)) => {
                    for dep in item.registry_dependencies.iter().rev() {
                        if !visited.contains(dep) {
                            stack.push(dep.clone());
                        }
                    }
                    resolved.push(item);
                }
                Ok(None) => {
                    warn!("Component '{}' not found in registry, skipping", name);
                }
                Err(e) => {
                    warn!("Failed to fetch component '{}': {}, skipping", name, e);
                }
            }
        }

        resolved
    }
}
