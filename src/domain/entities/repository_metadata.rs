//! Source repository identity and descriptive metadata.

use serde::{Deserialize, Serialize};

/// Owner/name pair identifying a repository on the code host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl RepositoryRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Public web URL of the repository.
    pub fn html_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }
}

impl std::fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Descriptive data fetched from the code host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryMetadata {
    pub description: Option<String>,
    pub topics: Vec<String>,
    pub language: Option<String>,
    pub stars: u64,
    pub html_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_ref_url() {
        let repo = RepositoryRef::new("octocat", "hello-world");
        assert_eq!(repo.html_url(), "https://github.com/octocat/hello-world");
        assert_eq!(repo.to_string(), "octocat/hello-world");
    }
}
