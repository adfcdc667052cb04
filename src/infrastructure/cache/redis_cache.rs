//! Redis-backed snapshot cache.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info, warn};

/// Namespace prepended to every key so the instance can be shared.
pub const KEY_NAMESPACE: &str = "portfolio-projects:";

/// Upstream response cache on a shared Redis instance.
///
/// One `ConnectionManager` is cloned per operation. Errors are logged and
/// swallowed.
pub struct RedisCache {
    conn: ConnectionManager,
}

impl RedisCache {
    /// Opens a managed connection and checks it with a `PING`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] for an invalid URL, an unreachable
    /// server or a failed `PING`.
    pub async fn connect(redis_url: &str) -> CacheResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("invalid Redis URL: {e}")))?;

        let mut conn = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(e.to_string()))?;

        conn.ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("PING failed: {e}")))?;

        info!(namespace = KEY_NAMESPACE, "Connected to Redis");
        Ok(Self { conn })
    }

    fn namespaced(key: &str) -> String {
        format!("{KEY_NAMESPACE}{key}")
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_json(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.conn.clone();

        match conn.get::<_, Option<String>>(Self::namespaced(key)).await {
            Ok(hit) => {
                debug!(key, hit = hit.is_some(), "Cache lookup");
                Ok(hit)
            }
            Err(e) => {
                warn!(key, error = %e, "Redis GET failed, treating as miss");
                Ok(None)
            }
        }
    }

    async fn set_json(&self, key: &str, json: &str, ttl_seconds: u64) -> CacheResult<()> {
        if ttl_seconds == 0 {
            return Ok(());
        }
        let mut conn = self.conn.clone();

        if let Err(e) = conn
            .set_ex::<_, _, ()>(Self::namespaced(key), json, ttl_seconds)
            .await
        {
            warn!(key, error = %e, "Redis SET failed, entry dropped");
        } else {
            debug!(key, ttl_seconds, "Cached upstream response");
        }
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_namespaced() {
        assert_eq!(
            RedisCache::namespaced("github:acme/site"),
            "portfolio-projects:github:acme/site"
        );
    }

    #[tokio::test]
    async fn test_connect_rejects_invalid_url() {
        let result = RedisCache::connect("not-a-redis-url").await;
        assert!(matches!(result, Err(CacheError::Connection(_))));
    }
}
