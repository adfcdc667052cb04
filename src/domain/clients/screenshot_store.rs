//! Trait for the object store holding preview images.

use crate::domain::entities::StoredScreenshot;
use crate::error::UpstreamError;
use async_trait::async_trait;

/// Name-addressed binary storage for screenshots.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScreenshotStore: Send + Sync {
    /// Lists stored assets whose pathname starts with `prefix`.
    async fn list(&self, prefix: &str) -> Result<Vec<StoredScreenshot>, UpstreamError>;

    /// Removes every asset stored under exactly `pathname`.
    ///
    /// Returns the number of assets removed; zero when nothing was stored.
    async fn delete(&self, pathname: &str) -> Result<usize, UpstreamError>;

    /// Stores a public-readable PNG under `pathname`.
    async fn put(&self, pathname: &str, bytes: Vec<u8>) -> Result<StoredScreenshot, UpstreamError>;
}
