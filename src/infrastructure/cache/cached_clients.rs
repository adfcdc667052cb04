//! Read-through caching decorators for the upstream clients.
//!
//! Only successful responses are stored; failures always reach the caller
//! so enrichment can degrade the affected field.

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

use super::service::CacheService;
use crate::domain::clients::{DeploymentProvider, RepositoryHost};
use crate::domain::entities::{DeployedProject, ProjectDomain, RepositoryMetadata, RepositoryRef};
use crate::error::UpstreamError;

/// Returns the cached value under `key`, or runs `fetch` and caches its
/// successful result for `ttl_seconds`.
async fn read_through<T, F, Fut>(
    cache: &dyn CacheService,
    key: &str,
    ttl_seconds: u64,
    fetch: F,
) -> Result<T, UpstreamError>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, UpstreamError>>,
{
    if let Ok(Some(json)) = cache.get_json(key).await {
        match serde_json::from_str(&json) {
            Ok(value) => return Ok(value),
            Err(e) => warn!(key, error = %e, "Discarding undecodable cache entry"),
        }
    }

    let value = fetch().await?;

    match serde_json::to_string(&value) {
        Ok(json) => {
            if let Err(e) = cache.set_json(key, &json, ttl_seconds).await {
                debug!(key, error = %e, "Cache write failed, continuing uncached");
            }
        }
        Err(e) => warn!(key, error = %e, "Failed to serialize cache entry"),
    }

    Ok(value)
}

/// Caches the project list and per-project domain lists.
pub struct CachedDeploymentProvider<P> {
    inner: P,
    cache: Arc<dyn CacheService>,
    ttl_seconds: u64,
}

impl<P: DeploymentProvider> CachedDeploymentProvider<P> {
    pub fn new(inner: P, cache: Arc<dyn CacheService>, ttl_seconds: u64) -> Self {
        Self {
            inner,
            cache,
            ttl_seconds,
        }
    }
}

#[async_trait]
impl<P: DeploymentProvider> DeploymentProvider for CachedDeploymentProvider<P> {
    async fn list_projects(&self) -> Result<Vec<DeployedProject>, UpstreamError> {
        read_through(self.cache.as_ref(), "vercel:projects", self.ttl_seconds, || {
            self.inner.list_projects()
        })
        .await
    }

    async fn list_domains(&self, project_id: &str) -> Result<Vec<ProjectDomain>, UpstreamError> {
        let key = format!("vercel:domains:{project_id}");
        read_through(self.cache.as_ref(), &key, self.ttl_seconds, || {
            self.inner.list_domains(project_id)
        })
        .await
    }
}

/// Caches repository metadata per owner/name.
pub struct CachedRepositoryHost<H> {
    inner: H,
    cache: Arc<dyn CacheService>,
    ttl_seconds: u64,
}

impl<H: RepositoryHost> CachedRepositoryHost<H> {
    pub fn new(inner: H, cache: Arc<dyn CacheService>, ttl_seconds: u64) -> Self {
        Self {
            inner,
            cache,
            ttl_seconds,
        }
    }
}

#[async_trait]
impl<H: RepositoryHost> RepositoryHost for CachedRepositoryHost<H> {
    async fn fetch_repository(
        &self,
        repository: &RepositoryRef,
    ) -> Result<RepositoryMetadata, UpstreamError> {
        let key = format!("github:{repository}");
        read_through(self.cache.as_ref(), &key, self.ttl_seconds, || {
            self.inner.fetch_repository(repository)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clients::{MockDeploymentProvider, MockRepositoryHost};
    use crate::infrastructure::cache::{CacheError, CacheResult, NullCache};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory cache double recording TTLs.
    #[derive(Default)]
    struct MemoryCache {
        entries: Mutex<HashMap<String, (String, u64)>>,
    }

    #[async_trait]
    impl CacheService for MemoryCache {
        async fn get_json(&self, key: &str) -> CacheResult<Option<String>> {
            Ok(self.entries.lock().unwrap().get(key).map(|(v, _)| v.clone()))
        }

        async fn set_json(&self, key: &str, json: &str, ttl_seconds: u64) -> CacheResult<()> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), (json.to_string(), ttl_seconds));
            Ok(())
        }

        fn backend(&self) -> &'static str {
            "memory"
        }

        async fn health_check(&self) -> bool {
            true
        }
    }

    /// Reads miss and writes fail, as with a Redis instance gone away.
    struct BrokenCache;

    #[async_trait]
    impl CacheService for BrokenCache {
        async fn get_json(&self, _key: &str) -> CacheResult<Option<String>> {
            Ok(None)
        }

        async fn set_json(&self, _key: &str, _json: &str, _ttl_seconds: u64) -> CacheResult<()> {
            Err(CacheError::Operation("READONLY".to_string()))
        }

        fn backend(&self) -> &'static str {
            "broken"
        }

        async fn health_check(&self) -> bool {
            false
        }
    }

    #[tokio::test]
    async fn test_repository_metadata_is_cached() {
        let mut host = MockRepositoryHost::new();
        host.expect_fetch_repository().times(1).returning(|_| {
            Ok(RepositoryMetadata {
                stars: 7,
                ..Default::default()
            })
        });

        let cache = Arc::new(MemoryCache::default());
        let cached = CachedRepositoryHost::new(host, cache.clone(), 3600);
        let repo = RepositoryRef::new("me", "site");

        let first = cached.fetch_repository(&repo).await.unwrap();
        let second = cached.fetch_repository(&repo).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.stars, 7);
        let entries = cache.entries.lock().unwrap();
        assert_eq!(entries.get("github:me/site").unwrap().1, 3600);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let mut host = MockRepositoryHost::new();
        host.expect_fetch_repository().times(2).returning(|_| {
            Err(UpstreamError::Api {
                status: 404,
                message: "Not Found".to_string(),
            })
        });

        let cache = Arc::new(MemoryCache::default());
        let cached = CachedRepositoryHost::new(host, cache.clone(), 3600);
        let repo = RepositoryRef::new("me", "missing");

        assert!(cached.fetch_repository(&repo).await.is_err());
        assert!(cached.fetch_repository(&repo).await.is_err());
        assert!(cache.entries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_cache_write_still_returns_value() {
        let mut host = MockRepositoryHost::new();
        host.expect_fetch_repository().times(2).returning(|_| {
            Ok(RepositoryMetadata {
                stars: 3,
                ..Default::default()
            })
        });

        let cached = CachedRepositoryHost::new(host, Arc::new(BrokenCache), 3600);
        let repo = RepositoryRef::new("me", "site");

        assert_eq!(cached.fetch_repository(&repo).await.unwrap().stars, 3);
        assert_eq!(cached.fetch_repository(&repo).await.unwrap().stars, 3);
    }

    #[tokio::test]
    async fn test_null_cache_always_fetches() {
        let mut provider = MockDeploymentProvider::new();
        provider
            .expect_list_projects()
            .times(2)
            .returning(|| Ok(vec![DeployedProject::new("prj_1", "demo")]));

        let cached = CachedDeploymentProvider::new(provider, Arc::new(NullCache::new()), 300);

        assert_eq!(cached.list_projects().await.unwrap().len(), 1);
        assert_eq!(cached.list_projects().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_domains_keyed_per_project() {
        let mut provider = MockDeploymentProvider::new();
        provider
            .expect_list_domains()
            .times(2)
            .returning(|id| Ok(vec![ProjectDomain::new(format!("{id}.example.com"), true)]));

        let cache = Arc::new(MemoryCache::default());
        let cached = CachedDeploymentProvider::new(provider, cache.clone(), 300);

        cached.list_domains("a").await.unwrap();
        cached.list_domains("b").await.unwrap();
        let again = cached.list_domains("a").await.unwrap();

        assert_eq!(again[0].name, "a.example.com");
        assert_eq!(cache.entries.lock().unwrap().len(), 2);
    }
}
