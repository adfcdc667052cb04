//! HTTP middleware for request processing and protection.
//!
//! Provides the cron trigger gate, rate limiting, and observability middleware.

pub mod cron_auth;
pub mod rate_limit;
pub mod tracing;
