//! Trait for the screenshot capture provider used by the capture job.

use crate::error::UpstreamError;
use async_trait::async_trait;

/// Renders a live page into PNG bytes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScreenshotCapture: Send + Sync {
    /// Requests a fresh, non-cached capture of `live_url`.
    async fn capture(&self, live_url: &str) -> Result<Vec<u8>, UpstreamError>;
}
