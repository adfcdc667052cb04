//! GitHub REST API client for repository metadata.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};
use tracing::debug;

use super::response::{endpoint, read_json};
use crate::domain::clients::RepositoryHost;
use crate::domain::entities::{RepositoryMetadata, RepositoryRef};
use crate::error::UpstreamError;

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

#[serde_as]
#[derive(Debug, Deserialize)]
struct GitHubRepo {
    description: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    topics: Vec<String>,
    language: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    stargazers_count: u64,
    html_url: Option<String>,
}

impl From<GitHubRepo> for RepositoryMetadata {
    fn from(r: GitHubRepo) -> Self {
        RepositoryMetadata {
            description: r.description.filter(|d| !d.trim().is_empty()),
            topics: r.topics,
            language: r.language,
            stars: r.stargazers_count,
            html_url: r.html_url,
        }
    }
}

/// Client for `GET /repos/{owner}/{repo}`.
///
/// Works unauthenticated (subject to the anonymous rate limit); a token
/// raises the limit.
pub struct GitHubClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(http: Client, base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            token: token.filter(|t| !t.is_empty()),
        }
    }
}

#[async_trait]
impl RepositoryHost for GitHubClient {
    async fn fetch_repository(
        &self,
        repository: &RepositoryRef,
    ) -> Result<RepositoryMetadata, UpstreamError> {
        let url = endpoint(
            &self.base_url,
            &["repos", &repository.owner, &repository.name],
        )?;

        let mut request = self.http.get(url).header(ACCEPT, GITHUB_ACCEPT);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let repo: GitHubRepo = read_json(request.send().await?).await?;
        debug!(%repository, stars = repo.stargazers_count, "Fetched repository metadata");

        Ok(repo.into())
    }
}
