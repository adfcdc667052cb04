//! Deployed project snapshot as reported by the hosting provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An application known to the deployment provider.
///
/// `name` is the join key across every other source (overrides, repository
/// lookup, stored screenshots). Snapshots are fetched fresh per invocation
/// and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployedProject {
    pub id: String,
    pub name: String,
    pub framework: Option<String>,
    pub production_aliases: Vec<String>,
    pub linked_repository: Option<LinkedRepository>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl DeployedProject {
    /// Creates a project with only the mandatory fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            framework: None,
            production_aliases: Vec::new(),
            linked_repository: None,
            updated_at: None,
        }
    }

    /// Timestamp used for ordering; unknown sorts as the epoch.
    pub fn sort_key(&self) -> i64 {
        self.updated_at.map(|t| t.timestamp_millis()).unwrap_or(0)
    }
}

/// Source repository the provider has linked to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedRepository {
    pub org: Option<String>,
    pub repo: Option<String>,
}

impl LinkedRepository {
    /// Owner derived from the link: the organization if set, otherwise the
    /// part of the repo path before the first `/`.
    ///
    /// Returns `None` when the link carries no repo path at all.
    pub fn owner(&self) -> Option<&str> {
        let repo = self.repo.as_deref().filter(|r| !r.is_empty())?;
        match self.org.as_deref().filter(|o| !o.is_empty()) {
            Some(org) => Some(org),
            None => repo.split('/').next().filter(|s| !s.is_empty()),
        }
    }
}

/// A domain attached to a project on the provider side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDomain {
    pub name: String,
    pub verified: bool,
}

impl ProjectDomain {
    pub fn new(name: impl Into<String>, verified: bool) -> Self {
        Self {
            name: name.into(),
            verified,
        }
    }
}
