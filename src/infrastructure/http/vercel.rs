//! Vercel REST API client (projects and project domains).

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use serde_with::{DefaultOnError, DefaultOnNull, VecSkipError, serde_as};
use tracing::{debug, warn};

use super::response::{endpoint, read_json};
use crate::domain::clients::DeploymentProvider;
use crate::domain::entities::{DeployedProject, LinkedRepository, ProjectDomain};
use crate::error::UpstreamError;

/// Page size requested from the project listing.
const PROJECT_PAGE_LIMIT: &str = "100";

/// One page of the project listing.
///
/// Entries without a usable `id` and `name` decode to `None` and are
/// counted as skipped; every other field degrades on its own.
#[serde_as]
#[derive(Debug, Deserialize)]
struct ProjectsResponse {
    #[serde_as(as = "DefaultOnNull<Vec<DefaultOnError<Option<_>>>>")]
    #[serde(default)]
    projects: Vec<Option<VercelProject>>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pagination: Option<Pagination>,
}

#[serde_as]
#[derive(Debug, Deserialize)]
struct Pagination {
    /// `until` value of the next page, `null` on the last one.
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    next: Option<i64>,
}

#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VercelProject {
    id: String,
    name: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    framework: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    updated_at: Option<f64>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    link: Option<VercelLink>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    targets: Option<VercelTargets>,
}

#[derive(Debug, Deserialize)]
struct VercelLink {
    org: Option<String>,
    repo: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VercelTargets {
    production: Option<ProductionTarget>,
}

#[serde_as]
#[derive(Debug, Deserialize)]
struct ProductionTarget {
    #[serde_as(as = "DefaultOnNull<VecSkipError<_>>")]
    #[serde(default)]
    alias: Vec<String>,
}

#[serde_as]
#[derive(Debug, Deserialize)]
struct DomainsResponse {
    #[serde_as(as = "DefaultOnNull<VecSkipError<_>>")]
    #[serde(default)]
    domains: Vec<VercelDomain>,
}

#[serde_as]
#[derive(Debug, Deserialize)]
struct VercelDomain {
    name: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    verified: bool,
}

impl ProjectsResponse {
    /// Decoded projects of this page and the number of entries dropped.
    fn into_projects(self) -> (Vec<DeployedProject>, usize) {
        let received = self.projects.len();
        let projects: Vec<DeployedProject> = self
            .projects
            .into_iter()
            .flatten()
            .map(DeployedProject::from)
            .collect();
        let skipped = received - projects.len();
        (projects, skipped)
    }

    fn next_page(&self) -> Option<i64> {
        self.pagination.as_ref().and_then(|p| p.next)
    }
}

impl From<VercelProject> for DeployedProject {
    fn from(p: VercelProject) -> Self {
        let production_aliases = p
            .targets
            .and_then(|t| t.production)
            .map(|prod| prod.alias)
            .unwrap_or_default();

        DeployedProject {
            id: p.id,
            name: p.name,
            framework: p.framework.filter(|f| !f.is_empty()),
            production_aliases,
            linked_repository: p.link.map(|l| LinkedRepository {
                org: l.org,
                repo: l.repo,
            }),
            updated_at: p
                .updated_at
                .filter(|ms| ms.is_finite())
                .and_then(|ms| DateTime::from_timestamp_millis(ms as i64)),
        }
    }
}

/// Bearer-authenticated client for the deployment provider.
pub struct VercelClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl VercelClient {
    /// Creates a client; a missing `token` surfaces on the first call as
    /// [`UpstreamError::MissingCredential`].
    pub fn new(http: Client, base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            token,
        }
    }

    fn token(&self) -> Result<&str, UpstreamError> {
        self.token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(UpstreamError::MissingCredential("VERCEL_TOKEN"))
    }
}

#[async_trait]
impl DeploymentProvider for VercelClient {
    /// Follows `pagination.next` until the last page.
    async fn list_projects(&self) -> Result<Vec<DeployedProject>, UpstreamError> {
        let token = self.token()?;
        let mut projects = Vec::new();
        let mut skipped = 0;
        let mut until: Option<i64> = None;

        loop {
            let mut url = endpoint(&self.base_url, &["v9", "projects"])?;
            {
                let mut query = url.query_pairs_mut();
                query.append_pair("limit", PROJECT_PAGE_LIMIT);
                if let Some(until) = until {
                    query.append_pair("until", &until.to_string());
                }
            }

            let resp = self.http.get(url).bearer_auth(token).send().await?;
            let page: ProjectsResponse = read_json(resp).await?;
            let next = page.next_page();

            let (decoded, dropped) = page.into_projects();
            projects.extend(decoded);
            skipped += dropped;

            match next {
                Some(next) if until != Some(next) => until = Some(next),
                _ => break,
            }
        }

        if skipped > 0 {
            warn!(skipped, "Skipped unusable project entries");
        }
        debug!(count = projects.len(), "Fetched deployed projects");
        Ok(projects)
    }

    async fn list_domains(&self, project_id: &str) -> Result<Vec<ProjectDomain>, UpstreamError> {
        let token = self.token()?;
        let url = endpoint(&self.base_url, &["v9", "projects", project_id, "domains"])?;

        let resp = self.http.get(url).bearer_auth(token).send().await?;
        let body: DomainsResponse = read_json(resp).await?;

        Ok(body
            .domains
            .into_iter()
            .map(|d| ProjectDomain::new(d.name, d.verified))
            .collect())
    }
}
