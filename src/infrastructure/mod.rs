//! Infrastructure layer for external integrations.
//!
//! This layer implements the client traits defined by the domain layer,
//! providing concrete HTTP clients, caching and static configuration loading.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (Redis and no-op implementations)
//! - [`http`] - Deployment provider, code host, object store and capture clients
//! - [`overrides`] - Override file loading

pub mod cache;
pub mod http;
pub mod overrides;
