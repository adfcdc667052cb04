//! ApiFlash capture client used by the screenshot job.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use super::response::{check_response, endpoint};
use crate::domain::clients::ScreenshotCapture;
use crate::error::UpstreamError;

/// Seconds the renderer waits for the page to settle.
pub const CAPTURE_DELAY_SECONDS: u32 = 5;
pub const CAPTURE_WIDTH: u32 = 1920;
pub const CAPTURE_HEIGHT: u32 = 1080;

/// Client for the `urltoimage` endpoint, always requesting a fresh PNG.
pub struct ApiFlashClient {
    http: Client,
    endpoint_url: String,
    access_key: Option<String>,
}

impl ApiFlashClient {
    pub fn new(http: Client, endpoint_url: impl Into<String>, access_key: Option<String>) -> Self {
        Self {
            http,
            endpoint_url: endpoint_url.into(),
            access_key,
        }
    }

    /// Returns `true` when an access key is configured.
    pub fn is_configured(&self) -> bool {
        self.access_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

#[async_trait]
impl ScreenshotCapture for ApiFlashClient {
    async fn capture(&self, live_url: &str) -> Result<Vec<u8>, UpstreamError> {
        let access_key = self
            .access_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(UpstreamError::MissingCredential("APIFLASH_ACCESS_KEY"))?;

        let mut url = endpoint(&self.endpoint_url, &[])?;
        url.query_pairs_mut()
            .append_pair("access_key", access_key)
            .append_pair("url", live_url)
            .append_pair("delay", &CAPTURE_DELAY_SECONDS.to_string())
            .append_pair("format", "png")
            .append_pair("width", &CAPTURE_WIDTH.to_string())
            .append_pair("height", &CAPTURE_HEIGHT.to_string())
            .append_pair("fresh", "true");

        info!(url = live_url, "Capturing screenshot");
        let resp = check_response(self.http.get(url).send().await?).await?;
        let bytes = resp.bytes().await?;

        if bytes.is_empty() {
            return Err(UpstreamError::Decode("empty image body".to_string()));
        }

        debug!(url = live_url, size = bytes.len(), "Screenshot captured");
        Ok(bytes.to_vec())
    }
}
