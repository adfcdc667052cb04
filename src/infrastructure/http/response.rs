//! Shared request/response helpers for the outbound clients.
//!
//! Centralizes client construction, endpoint building and status checks so
//! the individual API modules stay focused on request shape and mapping.

use crate::error::UpstreamError;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// User agent sent on every outbound request.
pub const USER_AGENT: &str = concat!("portfolio-projects/", env!("CARGO_PKG_VERSION"));

/// Builds a `reqwest` client with the given request timeout.
///
/// # Errors
///
/// Returns [`UpstreamError::Transport`] if the TLS backend fails to initialize.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, UpstreamError> {
    Ok(reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?)
}

/// Appends path segments to `base`, percent-encoding each one.
pub fn endpoint(base: &str, segments: &[&str]) -> Result<Url, UpstreamError> {
    let mut url =
        Url::parse(base).map_err(|e| UpstreamError::InvalidUrl(format!("{base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| UpstreamError::InvalidUrl(format!("{base}: cannot be a base")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Returns the response unchanged on success, [`UpstreamError::Api`] with
/// the status and body otherwise.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, UpstreamError> {
    if !resp.status().is_success() {
        return Err(UpstreamError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Checks the status and decodes a JSON body.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, UpstreamError> {
    check_response(resp)
        .await?
        .json::<T>()
        .await
        .map_err(|e| UpstreamError::Decode(e.to_string()))
}
