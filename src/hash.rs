// src/hash.rs

//! Canonical content hashing used as the drift oracle.
//!
//! Every digest is SHA-256 over line-ending-normalized text: CRLF sequences
//! are folded to LF before hashing, so the same logical content hashes
//! identically no matter which platform produced the checkout. Multi-file
//! digests additionally sort the per-file digests before combining, making
//! the result independent of the order the caller lists files in: a freshly
//! resolved dependency set and one reloaded from the manifest enumerate the
//! same files in different orders.

use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Compute the canonical SHA-256 digest of a text body.
///
/// Returns the digest as a 64-character lowercase hex string.
pub fn hash_content(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Hash a single file on disk.
///
/// Fails if the file does not exist or cannot be read as text.
pub fn hash_file(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::IoError(format!("Failed to read {}: {e}", path.display())))?;
    Ok(hash_content(&content))
}

/// Hash a set of files into one combined digest.
///
/// Each file is hashed independently, the per-file digests are sorted
/// lexicographically and concatenated, and the concatenation is hashed again.
///
/// Fails as a whole if any path is missing or unreadable; there is no partial
/// result. Callers that want to hash only the surviving subset of a file list
/// must pre-filter.
pub fn hash_files<P: AsRef<Path>>(paths: &[P]) -> Result<String> {
    let mut digests = Vec::with_capacity(paths.len());
    for path in paths {
        digests.push(hash_file(path.as_ref())?);
    }
    digests.sort();
    Ok(hash_content(&digests.concat()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_known_sha256_value() {
        assert_eq!(
            hash_content("Hello, World!"),
            "dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f"
        );
        assert_eq!(hash_content("Hello, World!").len(), 64);
    }

    #[test]
    fn test_crlf_lf_invariance() {
        let unix = "line one\nline two\nline three\n";
        let windows = "line one\r\nline two\r\nline three\r\n";
        assert_eq!(hash_content(unix), hash_content(windows));
    }

    #[test]
    fn test_lone_carriage_return_is_preserved() {
        // Only the CRLF pair is normalized; a bare CR is real content.
        assert_ne!(hash_content("a\rb"), hash_content("a\nb"));
    }

    #[test]
    fn test_hash_file_missing_path() {
        let result = hash_file(Path::new("/nonexistent/surely/missing.tsx"));
        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn test_hash_files_order_independence() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.tsx");
        let b = dir.path().join("b.tsx");
        let c = dir.path().join("c.tsx");
        fs::write(&a, "export const A = 1;\n").unwrap();
        fs::write(&b, "export const B = 2;\n").unwrap();
        fs::write(&c, "export const C = 3;\n").unwrap();

        let forward = hash_files(&[a.clone(), b.clone(), c.clone()]).unwrap();
        let backward = hash_files(&[c.clone(), b.clone(), a.clone()]).unwrap();
        let shuffled = hash_files(&[b, c, a]).unwrap();

        assert_eq!(forward, backward);
        assert_eq!(forward, shuffled);
    }

    #[test]
    fn test_hash_files_whole_call_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("present.tsx");
        fs::write(&present, "content\n").unwrap();
        let missing = dir.path().join("missing.tsx");

        let result = hash_files(&[present, missing]);
        assert!(result.is_err());
    }

    #[test]
    fn test_hash_files_differs_from_single_file_hash() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.tsx");
        fs::write(&a, "content\n").unwrap();

        // The combined digest re-hashes the sorted per-file digests, so even
        // a single-file set does not equal the raw file digest.
        let single = hash_file(&a).unwrap();
        let combined = hash_files(std::slice::from_ref(&a)).unwrap();
        assert_ne!(single, combined);
        assert_eq!(combined, hash_content(&single));
    }

    #[test]
    fn test_hash_files_accepts_pathbufs_and_refs() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.tsx");
        fs::write(&a, "content\n").unwrap();

        let owned: Vec<PathBuf> = vec![a.clone()];
        let borrowed: Vec<&Path> = vec![a.as_path()];
        assert_eq!(hash_files(&owned).unwrap(), hash_files(&borrowed).unwrap());
    }
}
