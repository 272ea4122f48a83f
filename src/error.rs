// src/error.rs

//! Crate-level error type and `Result` alias.
//!
//! String-payload variants in the teacher's shape (`IoError`, `DownloadError`,
//! `ParseError`, `NotFound`, `InitError`, `ConfigError`); constructed at call
//! sites via `map_err(|e| Error::IoError(format!(...)))`. The manifest store's
//! own typed [`ManifestError`](crate::manifest::ManifestError) converts in
//! transparently via `#[from]`.

use thiserror::Error;

use crate::manifest::ManifestError;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The crate-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// A filesystem read/write failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// A registry fetch failed (transport error or non-404 HTTP status).
    #[error("Download error: {0}")]
    DownloadError(String),

    /// Parsing registry or serialized data failed.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A requested component, file, or resource was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Initialization of a client or subsystem failed.
    #[error("Initialization error: {0}")]
    InitError(String),

    /// Project configuration was invalid or could not be read/written.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// An error from the manifest store.
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}
