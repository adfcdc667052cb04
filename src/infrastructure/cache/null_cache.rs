//! Cache stand-in used when no Redis instance is configured.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;

/// Never stores anything; every lookup is a miss and each invocation goes
/// straight to the upstream APIs.
///
/// Also wraps the deployment provider when its token is missing, so the
/// credential error is never hidden behind a stale cached listing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_json(&self, _key: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set_json(&self, _key: &str, _json: &str, _ttl_seconds: u64) -> CacheResult<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "none"
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_always_misses() {
        let cache = NullCache::new();
        cache.set_json("vercel:projects", "[]", 60).await.unwrap();

        assert_eq!(cache.get_json("vercel:projects").await.unwrap(), None);
        assert!(cache.health_check().await);
    }
}
