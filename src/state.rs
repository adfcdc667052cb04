//! Shared application state and its wiring from [`Config`].

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{
    CaptureService, CronAuth, EnrichmentOptions, ProjectService, RenderService,
};
use crate::config::Config;
use crate::domain::domain_selection::HostnamePolicy;
use crate::infrastructure::cache::{
    CacheService, CachedDeploymentProvider, CachedRepositoryHost, NullCache,
};
use crate::infrastructure::http::{
    ApiFlashClient, BlobStore, GitHubClient, VercelClient, build_client,
};
use crate::infrastructure::overrides;

pub type Deployments = CachedDeploymentProvider<VercelClient>;
pub type Repositories = CachedRepositoryHost<GitHubClient>;
pub type Screenshots = BlobStore;
pub type Captures = ApiFlashClient;

pub type ProjectPipeline = ProjectService<Deployments, Repositories, Screenshots>;
pub type CaptureJob = CaptureService<Deployments, Screenshots, Captures>;

/// Which credentials were present at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialStatus {
    pub vercel: bool,
    pub blob: bool,
    pub apiflash: bool,
    pub render: bool,
}

#[derive(Clone)]
pub struct AppState {
    pub project_service: Arc<ProjectPipeline>,
    pub capture_service: Arc<CaptureJob>,
    pub cron_auth: Arc<CronAuth>,
    pub cache: Arc<dyn CacheService>,
    pub credentials: CredentialStatus,
}

impl AppState {
    /// Builds the clients and services described by `config`.
    ///
    /// The project list is only cached when a provider token is configured,
    /// so a missing token is reported on every call instead of being masked
    /// by a cache hit.
    ///
    /// # Errors
    ///
    /// Fails if an HTTP client cannot be built or the override file is
    /// unreadable or invalid.
    pub fn from_config(config: &Config, cache: Arc<dyn CacheService>) -> Result<Self> {
        let http = build_client(Duration::from_secs(config.http_timeout_seconds))?;
        let capture_http = build_client(Duration::from_secs(config.capture_timeout_seconds))?;

        let catalog = Arc::new(overrides::load_optional(
            config.project_overrides_path.as_deref(),
        )?);
        let policy = HostnamePolicy::new(&config.internal_namespace_marker);

        let provider_cache: Arc<dyn CacheService> = if config.vercel_token.is_some() {
            cache.clone()
        } else {
            Arc::new(NullCache::new())
        };

        let deployments = Arc::new(CachedDeploymentProvider::new(
            VercelClient::new(
                http.clone(),
                &config.vercel_api_url,
                config.vercel_token.clone(),
            ),
            provider_cache,
            config.projects_cache_ttl_seconds,
        ));
        let repositories = Arc::new(CachedRepositoryHost::new(
            GitHubClient::new(
                http.clone(),
                &config.github_api_url,
                config.github_token.clone(),
            ),
            cache.clone(),
            config.repository_cache_ttl_seconds,
        ));
        let screenshots = Arc::new(BlobStore::new(
            http,
            &config.blob_api_url,
            config.blob_token.clone(),
        ));
        let captures = Arc::new(ApiFlashClient::new(
            capture_http,
            &config.apiflash_api_url,
            config.apiflash_access_key.clone(),
        ));

        let render = config
            .screenshot_api_key
            .clone()
            .map(|access_key| RenderService {
                endpoint: config.screenshot_render_url.clone(),
                access_key,
            });

        let project_service = ProjectService::new(
            deployments.clone(),
            repositories,
            screenshots.clone(),
            EnrichmentOptions {
                policy: policy.clone(),
                default_owner: config.github_default_owner.clone(),
                render,
                overrides: catalog,
                concurrency: config.enrich_concurrency,
            },
        );

        let capture_service = CaptureService::new(
            deployments,
            screenshots,
            captures,
            policy,
            config.capture_concurrency,
        )
        .with_missing_credentials(config.missing_capture_credentials());

        Ok(Self {
            project_service: Arc::new(project_service),
            capture_service: Arc::new(capture_service),
            cron_auth: Arc::new(CronAuth::new(config.cron_secret.clone())),
            cache,
            credentials: CredentialStatus {
                vercel: config.vercel_token.is_some(),
                blob: config.blob_token.is_some(),
                apiflash: config.apiflash_access_key.is_some(),
                render: config.screenshot_api_key.is_some(),
            },
        })
    }
}
