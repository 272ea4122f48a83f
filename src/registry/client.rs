// src/registry/client.rs

//! HTTP client for registry operations.
//!
//! Wraps a blocking reqwest client with a request timeout and bounded retry
//! for transient connection failures. A missing component (HTTP 404) is a
//! first-class `None`, not an error; callers decide whether absence matters.
//! No caching: every call goes to the wire.

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::item::{RegistryIndex, RegistryItem};
use crate::error::{Error, Result};

/// Default timeout for registry requests (30 seconds)
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum attempts for a failed request
const MAX_RETRIES: u32 = 3;

/// Retry delay in milliseconds, scaled linearly per attempt
const RETRY_DELAY_MS: u64 = 1000;

/// A source of registry items and file bodies.
///
/// The trait is the seam between the resolution/classification core and the
/// wire: production code talks to [`HttpRegistry`], fixtures and tests use
/// [`super::InMemoryRegistry`].
pub trait RegistrySource {
    /// Fetch component metadata by name. `Ok(None)` means the registry does
    /// not publish this name; `Err` means the registry could not be asked.
    fn fetch_item(&self, name: &str) -> Result<Option<RegistryItem>>;

    /// Fetch one raw file body belonging to a component.
    fn fetch_file(&self, name: &str, file_path: &str) -> Result<String>;

    /// Fetch the full catalog listing.
    fn fetch_index(&self) -> Result<Vec<RegistryItem>>;

    /// Return a copy of `item` with every file body populated.
    ///
    /// Files that already carry content are left as-is, so a hydrated item
    /// passes through unchanged.
    fn fetch_item_files(&self, item: &RegistryItem) -> Result<RegistryItem> {
        let mut hydrated = item.clone();
        for file in &mut hydrated.files {
            if file.content.is_none() {
                file.content = Some(self.fetch_file(&item.name, &file.path)?);
            }
        }
        Ok(hydrated)
    }
}

/// Registry client speaking the HTTP wire format.
pub struct HttpRegistry {
    client: Client,
    /// Base URL with any trailing slash removed
    base: String,
    max_retries: u32,
}

impl HttpRegistry {
    /// Create a client for the registry at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| Error::ConfigError(format!("Invalid registry URL '{base_url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::ConfigError(format!(
                "Unsupported registry URL scheme '{}' in '{base_url}'",
                parsed.scheme()
            )));
        }

        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::InitError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base: base_url.trim_end_matches('/').to_string(),
            max_retries: MAX_RETRIES,
        })
    }

    fn item_url(&self, name: &str) -> String {
        format!("{}/components/{}.json", self.base, name)
    }

    fn file_url(&self, name: &str, file_path: &str) -> String {
        format!("{}/components/{}/{}", self.base, name, file_path)
    }

    fn index_url(&self) -> String {
        format!("{}/index.json", self.base)
    }

    /// Issue a GET with retry on connection-level failures.
    ///
    /// HTTP error statuses are returned to the caller unretried; only
    /// transport errors (refused, timed out, reset) back off and retry.
    fn get_with_retry(&self, url: &str) -> Result<Response> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.client.get(url).send() {
                Ok(response) => return Ok(response),
                Err(e) => {
                    if attempt >= self.max_retries {
                        return Err(Error::DownloadError(format!(
                            "Failed to fetch {url} after {attempt} attempts: {e}"
                        )));
                    }
                    warn!("Fetch attempt {} for {} failed: {}, retrying...", attempt, url, e);
                    std::thread::sleep(Duration::from_millis(RETRY_DELAY_MS * attempt as u64));
                }
            }
        }
    }
}

impl RegistrySource for HttpRegistry {
    fn fetch_item(&self, name: &str) -> Result<Option<RegistryItem>> {
        let url = self.item_url(name);
        debug!("Fetching component metadata from {}", url);

        let response = self.get_with_retry(&url)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Error::DownloadError(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        let item: RegistryItem = response.json().map_err(|e| {
            Error::ParseError(format!("Failed to parse metadata for '{name}': {e}"))
        })?;
        Ok(Some(item))
    }

    fn fetch_file(&self, name: &str, file_path: &str) -> Result<String> {
        let url = self.file_url(name, file_path);
        debug!("Fetching file body from {}", url);

        let response = self.get_with_retry(&url)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(format!(
                "File '{file_path}' of component '{name}' is not published"
            )));
        }
        if !response.status().is_success() {
            return Err(Error::DownloadError(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        response
            .text()
            .map_err(|e| Error::DownloadError(format!("Failed to read body from {url}: {e}")))
    }

    fn fetch_index(&self) -> Result<Vec<RegistryItem>> {
        let url = self.index_url();
        debug!("Fetching registry index from {}", url);

        let response = self.get_with_retry(&url)?;
        if !response.status().is_success() {
            return Err(Error::DownloadError(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        let index: RegistryIndex = response
            .json()
            .map_err(|e| Error::ParseError(format!("Failed to parse registry index: {e}")))?;
        Ok(index.components)
    }
}
