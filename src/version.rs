// src/version.rs

//! Version parsing and ordering for component versions.
//!
//! The status classifier deliberately compares version strings only for
//! inequality (a registry that serves *any* other version than the installed
//! one is a reportable difference). Ordering matters where output is shaped
//! for humans: filtering changelog entries down to the releases newer than
//! the installed version.

use semver::Version;

/// Parse a component version, tolerating loosely formed strings.
///
/// Non-semver strings are normalized by extracting numeric
/// major/minor/patch segments, with missing or non-numeric segments
/// treated as zero.
pub fn parse_loose(s: &str) -> Version {
    if let Ok(v) = Version::parse(s) {
        return v;
    }

    let parts: Vec<&str> = s.split('.').collect();
    let major = parts.first().and_then(|p| p.parse().ok()).unwrap_or(0);
    let minor = parts.get(1).and_then(|p| p.parse().ok()).unwrap_or(0);
    let patch = parts.get(2).and_then(|p| p.parse().ok()).unwrap_or(0);
    Version::new(major, minor, patch)
}

/// True when `candidate` orders strictly after `baseline`.
pub fn is_newer(candidate: &str, baseline: &str) -> bool {
    parse_loose(candidate) > parse_loose(baseline)
}
