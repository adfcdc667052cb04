//! Enrichment orchestrator for the project listing.

use futures::{StreamExt, stream};
use metrics::counter;
use std::cmp::Reverse;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::domain_resolver::DomainResolver;
use super::repository_resolver::RepositoryResolver;
use super::screenshot_locator::{RenderService, ScreenshotLocator};
use crate::domain::clients::{DeploymentProvider, RepositoryHost, ScreenshotStore};
use crate::domain::domain_selection::HostnamePolicy;
use crate::domain::entities::{
    DeployedProject, EnrichedProject, OverrideCatalog, ProjectOverride, RepositoryMetadata,
    RepositoryRef, SCREENSHOT_PREFIX, ScreenshotIndex,
};
use crate::domain::tech_stack::{merge_additional, synthesize};
use crate::error::AppError;
use crate::utils::text::display_title;

/// Star count above which a project is featured by default.
pub const FEATURED_STAR_THRESHOLD: u64 = 5;

/// Static inputs of the enrichment pipeline.
#[derive(Debug, Clone)]
pub struct EnrichmentOptions {
    pub policy: HostnamePolicy,
    pub default_owner: String,
    pub render: Option<RenderService>,
    pub overrides: Arc<OverrideCatalog>,
    /// Maximum number of projects enriched at once.
    pub concurrency: usize,
}

/// Builds the enriched project list.
///
/// One invocation lists the deployed projects once and the stored
/// screenshots once, then enriches every project concurrently (bounded by
/// [`EnrichmentOptions::concurrency`]). Per-project failures degrade the
/// affected fields; only a failed project listing aborts the call.
pub struct ProjectService<P, H, S>
where
    P: DeploymentProvider,
    H: RepositoryHost,
    S: ScreenshotStore,
{
    provider: Arc<P>,
    store: Arc<S>,
    domains: DomainResolver<P>,
    repositories: RepositoryResolver<H>,
    locator: ScreenshotLocator,
    overrides: Arc<OverrideCatalog>,
    concurrency: usize,
}

impl<P, H, S> ProjectService<P, H, S>
where
    P: DeploymentProvider,
    H: RepositoryHost,
    S: ScreenshotStore,
{
    pub fn new(provider: Arc<P>, host: Arc<H>, store: Arc<S>, options: EnrichmentOptions) -> Self {
        Self {
            domains: DomainResolver::new(provider.clone(), options.policy),
            repositories: RepositoryResolver::new(host, options.default_owner),
            locator: ScreenshotLocator::new(options.render),
            overrides: options.overrides,
            concurrency: options.concurrency.max(1),
            provider,
            store,
        }
    }

    /// Returns every deployed project enriched, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingCredential`] when the provider token is not
    /// configured and [`AppError::Upstream`] when the project listing fails.
    pub async fn list_projects(&self) -> Result<Vec<EnrichedProject>, AppError> {
        let projects = self.provider.list_projects().await.map_err(|e| {
            error!(error = %e, "Failed to list deployed projects");
            AppError::from(e)
        })?;

        let index = self.screenshot_index().await;

        let mut enriched: Vec<EnrichedProject> = stream::iter(
            projects
                .iter()
                .map(|project| self.enrich(project, &index))
                .collect::<Vec<_>>(),
        )
        .buffered(self.concurrency)
        .collect()
        .await;

        enriched.sort_by_key(|p| Reverse(p.sort_key()));

        info!(
            count = enriched.len(),
            stored_screenshots = index.len(),
            "Enriched deployed projects"
        );
        Ok(enriched)
    }

    async fn screenshot_index(&self) -> ScreenshotIndex {
        match self.store.list(SCREENSHOT_PREFIX).await {
            Ok(screenshots) => ScreenshotIndex::new(screenshots),
            Err(e) => {
                warn!(error = %e, "Stored screenshots unavailable, continuing without them");
                counter!("upstream_failures_total", "source" => "screenshots").increment(1);
                ScreenshotIndex::default()
            }
        }
    }

    async fn enrich(&self, project: &DeployedProject, index: &ScreenshotIndex) -> EnrichedProject {
        let entry = self.overrides.get(&project.name);

        let (live_url, (repository, metadata)) = tokio::join!(
            self.domains.resolve_live_url(project),
            self.repositories.resolve(project, entry),
        );

        let image_url = self
            .locator
            .locate(&project.name, live_url.as_deref(), index);
        debug!(project = %project.name, live = live_url.is_some(), image = image_url.is_some(), "Enriched project");

        assemble(
            project,
            entry,
            &repository,
            metadata.as_ref(),
            live_url,
            image_url,
        )
    }
}

/// Merges every source into the output record.
fn assemble(
    project: &DeployedProject,
    entry: Option<&ProjectOverride>,
    repository: &RepositoryRef,
    metadata: Option<&RepositoryMetadata>,
    live_url: Option<String>,
    image_url: Option<String>,
) -> EnrichedProject {
    let description = entry
        .and_then(|o| o.description.clone())
        .filter(|d| !d.is_empty())
        .or_else(|| metadata.and_then(|m| m.description.clone()))
        .unwrap_or_else(|| default_description(project.framework.as_deref()));

    let synthesized = synthesize(
        project.framework.as_deref(),
        metadata.and_then(|m| m.language.as_deref()),
        metadata.map(|m| m.topics.as_slice()).unwrap_or_default(),
    );
    let tech_stack = match entry {
        Some(o) => merge_additional(synthesized, &o.additional_technologies),
        None => synthesized,
    };

    let stars = metadata.map(|m| m.stars).unwrap_or(0);
    let featured = entry
        .and_then(|o| o.featured)
        .unwrap_or(stars > FEATURED_STAR_THRESHOLD);

    let github_url = metadata
        .and_then(|m| m.html_url.clone())
        .unwrap_or_else(|| repository.html_url());

    EnrichedProject {
        id: project.id.clone(),
        title: display_title(&project.name),
        description,
        long_description: entry.and_then(|o| o.long_description.clone()),
        tech_stack,
        live_url,
        github_url: Some(github_url),
        image_url,
        framework: project.framework.clone(),
        updated_at: project.updated_at,
        featured,
    }
}

/// Fallback description naming the framework, or "web" when unknown.
pub fn default_description(framework: Option<&str>) -> String {
    format!(
        "{} application deployed on Vercel",
        framework.unwrap_or("web")
    )
}
