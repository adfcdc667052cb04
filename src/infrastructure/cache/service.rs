//! Cache contract for serialized upstream responses.

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache connection error: {0}")]
    Connection(String),

    #[error("cache operation error: {0}")]
    Operation(String),
}

pub type CacheResult<T> = Result<T, CacheError>;

/// Key/value store for JSON snapshots of upstream responses.
///
/// Implementations fail open: a backend error reads as a miss and a failed
/// write is dropped, so a broken cache only costs extra upstream calls.
///
/// - [`crate::infrastructure::cache::RedisCache`] - shared Redis instance with per-key TTL
/// - [`crate::infrastructure::cache::NullCache`] - always misses
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the stored document, `None` on a miss or backend error.
    async fn get_json(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `json` under `key` for `ttl_seconds`.
    async fn set_json(&self, key: &str, json: &str, ttl_seconds: u64) -> CacheResult<()>;

    /// Short backend name shown by the health check.
    fn backend(&self) -> &'static str;

    /// Whether the backend currently answers.
    async fn health_check(&self) -> bool;
}
