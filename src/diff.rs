// src/diff.rs

//! Line-level diff between installed files and a candidate registry item.
//!
//! Used before any destructive update: the generator resolves each candidate
//! file to its on-disk location through the same alias rules the installer
//! uses, then emits a unified-diff block per changed file. Files with zero
//! differing lines emit nothing, and a candidate file with no local
//! counterpart is rendered as a whole-file addition.

use std::fs;
use std::path::Path;

use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use crate::registry::RegistryItem;

/// Returned when no file produced a diff block; a valid result, not an error
pub const NO_CHANGES: &str = "No changes detected.";

/// Generate a human-readable diff for `candidate` against the project.
///
/// Every file of the candidate must carry its body (see
/// [`RegistrySource::fetch_item_files`](crate::registry::RegistrySource::fetch_item_files)).
pub fn generate_diff(
    root: &Path,
    config: &ProjectConfig,
    candidate: &RegistryItem,
) -> Result<String> {
    let mut out = String::new();

    for file in &candidate.files {
        let Some(content) = file.content.as_deref() else {
            return Err(Error::NotFound(format!(
                "File body for '{}' of component '{}' was never fetched",
                file.path, candidate.name
            )));
        };

        let rel = config.target_path(&file.path);
        let on_disk = root.join(&rel);

        if on_disk.exists() {
            let local = fs::read_to_string(&on_disk)
                .map_err(|e| Error::IoError(format!("Failed to read {}: {e}", on_disk.display())))?;

            let patch = diffy::create_patch(&local, content);
            if patch.hunks().is_empty() {
                continue;
            }

            out.push_str(&format!("--- {}\n+++ {} (registry)\n", rel.display(), file.path));
            out.push_str(&hunks_of(&patch.to_string()));
            out.push('\n');
        } else {
            out.push_str(&format!("--- /dev/null\n+++ {} (new file)\n", rel.display()));
            for line in content.lines() {
                out.push('+');
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }
    }

    if out.is_empty() {
        Ok(NO_CHANGES.to_string())
    } else {
        Ok(out.trim_end().to_string())
    }
}

/// Strip diffy's fixed `--- original` / `+++ modified` header pair, keeping
/// only the hunks.
fn hunks_of(patch_text: &str) -> String {
    let mut hunks: String = patch_text
        .lines()
        .skip(2)
        .flat_map(|line| [line, "\n"])
        .collect();
    if !hunks.ends_with('\n') {
        hunks.push('\n');
    }
    hunks
}
