//! Source-repository selection and metadata lookup.

use metrics::counter;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::clients::RepositoryHost;
use crate::domain::entities::{
    DeployedProject, ProjectOverride, RepositoryMetadata, RepositoryRef,
};

/// Chooses the repository describing a project.
///
/// Owner precedence: override, provider link, `default_owner`. Name
/// precedence: override, then the deployed project name.
///
/// Owner and name are overridden independently: a name-only override still
/// applies and keeps the linked or default owner.
pub fn repository_ref(
    project: &DeployedProject,
    project_override: Option<&ProjectOverride>,
    default_owner: &str,
) -> RepositoryRef {
    let owner = project_override
        .and_then(|o| o.repository_owner.as_deref())
        .or_else(|| {
            project
                .linked_repository
                .as_ref()
                .and_then(|link| link.owner())
        })
        .filter(|owner| !owner.is_empty())
        .unwrap_or(default_owner);

    let name = project_override
        .and_then(|o| o.repository_name.as_deref())
        .filter(|name| !name.is_empty())
        .unwrap_or(&project.name);

    RepositoryRef::new(owner, name)
}

/// Resolves and fetches repository metadata for a project.
pub struct RepositoryResolver<H: RepositoryHost> {
    host: Arc<H>,
    default_owner: String,
}

impl<H: RepositoryHost> RepositoryResolver<H> {
    pub fn new(host: Arc<H>, default_owner: impl Into<String>) -> Self {
        Self {
            host,
            default_owner: default_owner.into(),
        }
    }

    /// Returns the chosen repository and its metadata, `None` when the code
    /// host could not provide it.
    pub async fn resolve(
        &self,
        project: &DeployedProject,
        project_override: Option<&ProjectOverride>,
    ) -> (RepositoryRef, Option<RepositoryMetadata>) {
        let repository = repository_ref(project, project_override, &self.default_owner);

        match self.host.fetch_repository(&repository).await {
            Ok(metadata) => {
                debug!(project = %project.name, repository = %repository, "Fetched repository metadata");
                (repository, Some(metadata))
            }
            Err(e) => {
                warn!(
                    project = %project.name,
                    repository = %repository,
                    error = %e,
                    "Repository metadata unavailable"
                );
                counter!("upstream_failures_total", "source" => "repository").increment(1);
                (repository, None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clients::MockRepositoryHost;
    use crate::domain::entities::LinkedRepository;
    use crate::error::UpstreamError;

    fn linked_project(org: Option<&str>, repo: Option<&str>) -> DeployedProject {
        DeployedProject {
            linked_repository: Some(LinkedRepository {
                org: org.map(String::from),
                repo: repo.map(String::from),
            }),
            ..DeployedProject::new("prj_1", "my-site")
        }
    }

    #[test]
    fn test_override_wins() {
        let project = linked_project(Some("acme"), Some("acme/other"));
        let entry = ProjectOverride {
            repository_owner: Some("someone".to_string()),
            repository_name: Some("site-src".to_string()),
            ..ProjectOverride::new("my-site")
        };

        let repo = repository_ref(&project, Some(&entry), "default-owner");

        assert_eq!(repo, RepositoryRef::new("someone", "site-src"));
    }

    #[test]
    fn test_linked_org_used_as_owner() {
        let repo = repository_ref(&linked_project(Some("acme"), Some("x")), None, "default-owner");
        assert_eq!(repo, RepositoryRef::new("acme", "my-site"));
    }

    #[test]
    fn test_linked_repo_path_prefix_used_as_owner() {
        let repo = repository_ref(&linked_project(None, Some("jdoe/my-site")), None, "default-owner");
        assert_eq!(repo.owner, "jdoe");
    }

    #[test]
    fn test_default_owner_fallback() {
        let project = DeployedProject::new("prj_1", "my-site");
        let repo = repository_ref(&project, None, "default-owner");
        assert_eq!(repo, RepositoryRef::new("default-owner", "my-site"));
    }

    #[test]
    fn test_override_name_only_keeps_linked_owner() {
        let entry = ProjectOverride {
            repository_name: Some("renamed".to_string()),
            ..ProjectOverride::new("my-site")
        };

        let repo = repository_ref(&linked_project(Some("acme"), Some("acme/x")), Some(&entry), "d");

        assert_eq!(repo, RepositoryRef::new("acme", "renamed"));
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_no_metadata() {
        let mut host = MockRepositoryHost::new();
        host.expect_fetch_repository().times(1).returning(|_| {
            Err(UpstreamError::Api {
                status: 404,
                message: "Not Found".to_string(),
            })
        });

        let resolver = RepositoryResolver::new(Arc::new(host), "me");
        let (repo, metadata) = resolver
            .resolve(&DeployedProject::new("prj_1", "ghost"), None)
            .await;

        assert_eq!(repo, RepositoryRef::new("me", "ghost"));
        assert!(metadata.is_none());
    }
}
