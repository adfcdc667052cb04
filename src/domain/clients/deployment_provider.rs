//! Trait for the deployment provider (project and domain listings).

use crate::domain::entities::{DeployedProject, ProjectDomain};
use crate::error::UpstreamError;
use async_trait::async_trait;

/// Read access to the hosting platform's project registry.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::VercelClient`] - Vercel REST API
/// - [`crate::infrastructure::cache::CachedDeploymentProvider`] - caching decorator
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeploymentProvider: Send + Sync {
    /// Lists every deployed project visible to the configured token.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::MissingCredential`] when no token is configured,
    /// other variants on transport, status or decode failures.
    async fn list_projects(&self) -> Result<Vec<DeployedProject>, UpstreamError>;

    /// Lists the domains attached to one project, in provider order.
    async fn list_domains(&self, project_id: &str) -> Result<Vec<ProjectDomain>, UpstreamError>;
}
