//! Live-URL resolution for deployed projects.

use metrics::counter;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::clients::DeploymentProvider;
use crate::domain::domain_selection::{DomainCandidates, HostnamePolicy, select_hostname};
use crate::domain::entities::DeployedProject;

/// Picks the best public hostname for a project.
///
/// Shared by the read path and the capture job.
pub struct DomainResolver<P: DeploymentProvider> {
    provider: Arc<P>,
    policy: HostnamePolicy,
}

impl<P: DeploymentProvider> DomainResolver<P> {
    pub fn new(provider: Arc<P>, policy: HostnamePolicy) -> Self {
        Self { provider, policy }
    }

    /// Returns the winning hostname, or `None` when the project has no
    /// usable public address.
    ///
    /// A failed domain lookup is treated as an empty domain list, so the
    /// declared production aliases still get a chance.
    pub async fn resolve(&self, project: &DeployedProject) -> Option<String> {
        let domains = match self.provider.list_domains(&project.id).await {
            Ok(domains) => domains,
            Err(e) => {
                warn!(project = %project.name, error = %e, "Domain lookup failed, using aliases only");
                counter!("upstream_failures_total", "source" => "domains").increment(1);
                Vec::new()
            }
        };

        let candidates = DomainCandidates {
            domains: &domains,
            aliases: &project.production_aliases,
        };

        let (strategy, host) = select_hostname(&self.policy, &candidates)?;
        debug!(project = %project.name, strategy = strategy.name(), host, "Resolved hostname");
        Some(host.to_string())
    }

    /// Like [`Self::resolve`] but returns an `https://` URL.
    pub async fn resolve_live_url(&self, project: &DeployedProject) -> Option<String> {
        self.resolve(project).await.map(|host| format!("https://{host}"))
    }
}
