//! Trait for the source-code host.

use crate::domain::entities::{RepositoryMetadata, RepositoryRef};
use crate::error::UpstreamError;
use async_trait::async_trait;

/// Fetches descriptive metadata for a single repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// # Errors
    ///
    /// Returns [`UpstreamError::Api`] for non-2xx responses (including 404
    /// for unknown repositories) and [`UpstreamError::Transport`] when the
    /// host cannot be reached.
    async fn fetch_repository(
        &self,
        repository: &RepositoryRef,
    ) -> Result<RepositoryMetadata, UpstreamError>;
}
