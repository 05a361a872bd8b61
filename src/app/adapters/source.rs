//! Where the raw HURDAT2 text comes from
//!
//! The core only needs the dataset as a string. Sources hide whether that
//! string was read from disk, downloaded, or served from the local cache.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::constants::APP_DIR_NAME;
use crate::{Error, Result};

const USER_AGENT: &str = concat!("hurdat-landfall/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const FALLBACK_CACHE_FILE: &str = "hurdat2.txt";

/// Anything that can produce the dataset text
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Short description for logs and progress messages
    fn describe(&self) -> String;

    /// Fetch the whole dataset as UTF-8 text
    ///
    /// # Errors
    ///
    /// Returns an I/O or HTTP error if the dataset cannot be obtained.
    async fn fetch(&self) -> Result<String>;
}

/// Dataset file already on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String> {
        debug!("Reading dataset from {}", self.path.display());
        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            Error::io(
                format!("Failed to read dataset file {}", self.path.display()),
                e,
            )
        })
    }
}

/// Dataset downloaded over HTTP(S) on every fetch
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::http(&url, e))?;

        Ok(Self { url, client })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String> {
        info!("Downloading dataset from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| Error::http(&self.url, e))?;

        let text = response
            .text()
            .await
            .map_err(|e| Error::http(&self.url, e))?;

        debug!("Downloaded {} bytes from {}", text.len(), self.url);
        Ok(text)
    }
}

/// HTTP source that keeps a copy of the download in a cache directory
///
/// The cached copy is reused until `refresh` is set. A failure to write the
/// cache is logged and otherwise ignored.
#[derive(Debug, Clone)]
pub struct CachedSource {
    inner: HttpSource,
    cache_path: PathBuf,
    refresh: bool,
}

impl CachedSource {
    /// Cache under the platform cache directory (`~/.cache/hurdat-landfall` on Linux)
    pub fn new(inner: HttpSource, refresh: bool) -> Result<Self> {
        let cache_dir = default_cache_dir()?;
        Ok(Self::with_cache_dir(inner, cache_dir, refresh))
    }

    pub fn with_cache_dir(inner: HttpSource, cache_dir: impl AsRef<Path>, refresh: bool) -> Self {
        let cache_path = cache_dir.as_ref().join(cache_file_name(inner.url()));
        Self {
            inner,
            cache_path,
            refresh,
        }
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    async fn store(&self, text: &str) -> Result<()> {
        if let Some(parent) = self.cache_path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::io(
                    format!("Failed to create cache directory {}", parent.display()),
                    e,
                )
            })?;
        }
        tokio::fs::write(&self.cache_path, text).await.map_err(|e| {
            Error::io(
                format!("Failed to write cache file {}", self.cache_path.display()),
                e,
            )
        })
    }
}

#[async_trait]
impl DatasetSource for CachedSource {
    fn describe(&self) -> String {
        format!("{} (cached at {})", self.inner.url(), self.cache_path.display())
    }

    async fn fetch(&self) -> Result<String> {
        if !self.refresh && self.cache_path.exists() {
            info!("Using cached dataset {}", self.cache_path.display());
            return tokio::fs::read_to_string(&self.cache_path)
                .await
                .map_err(|e| {
                    Error::io(
                        format!("Failed to read cache file {}", self.cache_path.display()),
                        e,
                    )
                });
        }

        let text = self.inner.fetch().await?;
        if let Err(e) = self.store(&text).await {
            warn!("Could not cache dataset: {}", e);
        } else {
            debug!("Cached dataset at {}", self.cache_path.display());
        }
        Ok(text)
    }
}

/// Platform cache directory for this application
pub fn default_cache_dir() -> Result<PathBuf> {
    dirs::cache_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| Error::configuration("Could not determine user cache directory"))
}

/// File name for a cached download: the last URL path segment
fn cache_file_name(url: &str) -> String {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    without_query
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_CACHE_FILE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_DATASET_URL;
    use tempfile::TempDir;

    #[test]
    fn test_cache_file_name() {
        assert_eq!(
            cache_file_name(DEFAULT_DATASET_URL),
            "hurdat2-1851-2021-041922.txt"
        );
        assert_eq!(cache_file_name("https://example.com/data.txt?v=2"), "data.txt");
        assert_eq!(cache_file_name("https://example.com/"), FALLBACK_CACHE_FILE);
    }

    #[tokio::test]
    async fn test_file_source_reads_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hurdat2.txt");
        std::fs::write(&path, "AL011851, UNNAMED, 0,\n").unwrap();

        let source = FileSource::new(&path);
        assert_eq!(source.fetch().await.unwrap(), "AL011851, UNNAMED, 0,\n");
        assert_eq!(source.describe(), path.display().to_string());
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let source = FileSource::new("/nonexistent/hurdat2.txt");
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[tokio::test]
    async fn test_cached_source_uses_existing_copy() {
        let dir = TempDir::new().unwrap();
        let inner = HttpSource::new("http://127.0.0.1:9/hurdat2-test.txt").unwrap();
        let source = CachedSource::with_cache_dir(inner, dir.path(), false);
        std::fs::write(source.cache_path(), "cached text").unwrap();

        assert_eq!(source.fetch().await.unwrap(), "cached text");
    }

    #[tokio::test]
    async fn test_cached_source_refresh_bypasses_cache() {
        let dir = TempDir::new().unwrap();
        // Port 9 (discard) is closed, so a real download attempt fails fast
        let inner = HttpSource::new("http://127.0.0.1:9/hurdat2-test.txt").unwrap();
        let source = CachedSource::with_cache_dir(inner, dir.path(), true);
        std::fs::write(source.cache_path(), "cached text").unwrap();

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, Error::Http { .. }));
    }

    #[tokio::test]
    async fn test_sources_as_trait_objects() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.txt");
        std::fs::write(&path, "x").unwrap();

        let sources: Vec<Box<dyn DatasetSource>> = vec![Box::new(FileSource::new(&path))];
        for source in &sources {
            assert_eq!(source.fetch().await.unwrap(), "x");
        }
    }
}
