//! # Portfolio Projects
//!
//! Project metadata aggregation service for a portfolio site, built with Axum.
//!
//! Every deployed application known to the hosting provider becomes one
//! display-ready record, enriched from the code host and the screenshot
//! store. A separate, scheduler-triggered job refreshes the stored
//! screenshots.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, client traits, hostname and tech-stack rules
//! - **Application Layer** ([`application`]) - Enrichment and capture orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP clients, cache, override loading
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Concurrent, bounded per-project enrichment with per-field degradation
//! - Ordered hostname selection strategies
//! - Optional Redis caching of upstream responses
//! - Shared-secret gate for the capture trigger
//! - Rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! export VERCEL_TOKEN="..."
//! export REDIS_URL="redis://localhost:6379"  # Optional
//!
//! cargo run
//! curl http://localhost:3000/api/projects
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CaptureService, CronAuth, ProjectService};
    pub use crate::domain::entities::{DeployedProject, EnrichedProject, ProjectOverride};
    pub use crate::error::{AppError, UpstreamError};
    pub use crate::state::AppState;
}
