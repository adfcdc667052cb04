//! Ordered strategies for picking a project's public hostname.
//!
//! Each [`DomainStrategy`] is a named predicate + selector over the
//! candidates gathered for one project. [`select_hostname`] evaluates them
//! in [`DOMAIN_STRATEGIES`] order; the first match wins.

use crate::domain::entities::ProjectDomain;

/// Substring identifying per-branch preview deployments.
pub const BRANCH_PREVIEW_MARKER: &str = "-git-";

/// Suffix of provider-hosted public subdomains.
pub const PROVIDER_PUBLIC_SUFFIX: &str = ".vercel.app";

/// Hostname classification rules for one operator.
#[derive(Debug, Clone)]
pub struct HostnamePolicy {
    internal_marker: String,
}

impl HostnamePolicy {
    /// `internal_marker` is the substring marking the operator's private or
    /// staging namespace. An empty marker matches nothing.
    pub fn new(internal_marker: impl Into<String>) -> Self {
        Self {
            internal_marker: internal_marker.into(),
        }
    }

    pub fn is_internal(&self, host: &str) -> bool {
        !self.internal_marker.is_empty() && host.contains(&self.internal_marker)
    }

    pub fn is_branch_preview(&self, host: &str) -> bool {
        host.contains(BRANCH_PREVIEW_MARKER)
    }

    pub fn is_provider_subdomain(&self, host: &str) -> bool {
        host.ends_with(PROVIDER_PUBLIC_SUFFIX)
    }

    fn is_public(&self, host: &str) -> bool {
        !host.is_empty() && !self.is_internal(host) && !self.is_branch_preview(host)
    }
}

/// Everything known about a project's hostnames at resolution time.
///
/// `domains` is empty when the domain lookup failed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomainCandidates<'a> {
    pub domains: &'a [ProjectDomain],
    pub aliases: &'a [String],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainStrategy {
    /// Verified operator-owned domain: not provider-hosted, outside the
    /// internal namespace and not a branch preview.
    CustomDomain,
    /// Verified provider-hosted subdomain outside the internal namespace.
    ProviderSubdomain,
    /// Declared production alias outside the internal namespace and not a
    /// branch preview.
    ProductionAlias,
}

/// Evaluation order of the strategies.
pub const DOMAIN_STRATEGIES: [DomainStrategy; 3] = [
    DomainStrategy::CustomDomain,
    DomainStrategy::ProviderSubdomain,
    DomainStrategy::ProductionAlias,
];

impl DomainStrategy {
    pub fn name(self) -> &'static str {
        match self {
            DomainStrategy::CustomDomain => "custom_domain",
            DomainStrategy::ProviderSubdomain => "provider_subdomain",
            DomainStrategy::ProductionAlias => "production_alias",
        }
    }

    /// Returns the first candidate this strategy accepts.
    pub fn select<'a>(
        self,
        policy: &HostnamePolicy,
        candidates: &DomainCandidates<'a>,
    ) -> Option<&'a str> {
        let mut verified = candidates
            .domains
            .iter()
            .filter(|d| d.verified)
            .map(|d| d.name.as_str());

        match self {
            // Provider subdomains belong to the next strategy, even when listed first.
            DomainStrategy::CustomDomain => {
                verified.find(|h| policy.is_public(h) && !policy.is_provider_subdomain(h))
            }
            DomainStrategy::ProviderSubdomain => {
                verified.find(|h| policy.is_provider_subdomain(h) && !policy.is_internal(h))
            }
            DomainStrategy::ProductionAlias => candidates
                .aliases
                .iter()
                .map(String::as_str)
                .find(|h| policy.is_public(h)),
        }
    }
}

/// Runs the strategies in order and returns the winning hostname together
/// with the strategy that produced it.
pub fn select_hostname<'a>(
    policy: &HostnamePolicy,
    candidates: &DomainCandidates<'a>,
) -> Option<(DomainStrategy, &'a str)> {
    DOMAIN_STRATEGIES
        .iter()
        .find_map(|strategy| strategy.select(policy, candidates).map(|h| (*strategy, h)))
}
