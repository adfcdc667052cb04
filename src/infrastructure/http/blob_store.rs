//! Vercel Blob object-store client for screenshot assets.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::json;
use serde_with::{DefaultOnNull, VecSkipError, serde_as};
use tracing::debug;

use super::response::{check_response, endpoint, read_json};
use crate::domain::clients::ScreenshotStore;
use crate::domain::entities::StoredScreenshot;
use crate::error::UpstreamError;

const BLOB_API_VERSION: &str = "7";
const LIST_PAGE_LIMIT: &str = "1000";

#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    #[serde_as(as = "DefaultOnNull<VecSkipError<_>>")]
    #[serde(default)]
    blobs: Vec<BlobEntry>,
    cursor: Option<String>,
    #[serde(default)]
    has_more: bool,
}

#[derive(Debug, Deserialize)]
struct BlobEntry {
    url: String,
    pathname: String,
}

impl From<BlobEntry> for StoredScreenshot {
    fn from(b: BlobEntry) -> Self {
        StoredScreenshot {
            pathname: b.pathname,
            url: b.url,
        }
    }
}

/// Bearer-authenticated client for list/put/delete by pathname.
pub struct BlobStore {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl BlobStore {
    pub fn new(http: Client, base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            token,
        }
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, UpstreamError> {
        let token = self
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(UpstreamError::MissingCredential("BLOB_READ_WRITE_TOKEN"))?;
        Ok(request
            .bearer_auth(token)
            .header("x-api-version", BLOB_API_VERSION))
    }
}

#[async_trait]
impl ScreenshotStore for BlobStore {
    async fn list(&self, prefix: &str) -> Result<Vec<StoredScreenshot>, UpstreamError> {
        let mut screenshots = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut url = endpoint(&self.base_url, &[])?;
            {
                let mut query = url.query_pairs_mut();
                query
                    .append_pair("prefix", prefix)
                    .append_pair("limit", LIST_PAGE_LIMIT);
                if let Some(cursor) = &cursor {
                    query.append_pair("cursor", cursor);
                }
            }

            let resp = self.authorized(self.http.get(url))?.send().await?;
            let page: ListResponse = read_json(resp).await?;
            screenshots.extend(page.blobs.into_iter().map(StoredScreenshot::from));

            match page.cursor {
                Some(next) if page.has_more => cursor = Some(next),
                _ => break,
            }
        }

        debug!(prefix, count = screenshots.len(), "Listed stored screenshots");
        Ok(screenshots)
    }

    async fn delete(&self, pathname: &str) -> Result<usize, UpstreamError> {
        let urls: Vec<String> = self
            .list(pathname)
            .await?
            .into_iter()
            .filter(|s| s.pathname == pathname)
            .map(|s| s.url)
            .collect();

        if urls.is_empty() {
            return Ok(0);
        }

        let url = endpoint(&self.base_url, &["delete"])?;
        let resp = self
            .authorized(self.http.post(url))?
            .json(&json!({ "urls": urls }))
            .send()
            .await?;
        check_response(resp).await?;

        debug!(pathname, removed = urls.len(), "Deleted stored screenshot");
        Ok(urls.len())
    }

    async fn put(&self, pathname: &str, bytes: Vec<u8>) -> Result<StoredScreenshot, UpstreamError> {
        let segments: Vec<&str> = pathname.split('/').collect();
        let url = endpoint(&self.base_url, &segments)?;

        let resp = self
            .authorized(self.http.put(url))?
            .header("x-content-type", "image/png")
            .header("x-add-random-suffix", "0")
            .header("x-allow-overwrite", "1")
            .body(bytes)
            .send()
            .await?;
        let stored: BlobEntry = read_json(resp).await?;

        debug!(pathname, url = %stored.url, "Stored screenshot");
        Ok(stored.into())
    }
}
