//! Caching layer for upstream API responses.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`RedisCache`] - Production Redis-backed cache
//! - [`NullCache`] - Always-miss stand-in when Redis is not configured
//!
//! and read-through decorators wrapping the deployment provider and code
//! host clients.

mod cached_clients;
mod null_cache;
mod redis_cache;
mod service;

pub use cached_clients::{CachedDeploymentProvider, CachedRepositoryHost};
pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};
