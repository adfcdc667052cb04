//! Operator-authored presentation overrides, keyed by project name.

use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;
use validator::Validate;

/// GitHub login / organization name characters.
static OWNER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").unwrap());

/// Manual enrichment for one deployed project.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOverride {
    /// Deployed project name this entry applies to (exact match).
    #[validate(length(min = 1, max = 100))]
    pub project_name: String,

    #[validate(length(min = 1, max = 39))]
    #[validate(regex(path = "*OWNER_REGEX"))]
    pub repository_owner: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub repository_name: Option<String>,

    pub description: Option<String>,

    pub long_description: Option<String>,

    #[serde(default)]
    pub additional_technologies: Vec<String>,

    pub featured: Option<bool>,
}

impl ProjectOverride {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            ..Default::default()
        }
    }
}

/// Errors raised while building an [`OverrideCatalog`].
#[derive(Debug, thiserror::Error)]
pub enum OverrideError {
    #[error("invalid override for '{name}': {source}")]
    Invalid {
        name: String,
        #[source]
        source: validator::ValidationErrors,
    },

    #[error("duplicate override for project '{0}'")]
    Duplicate(String),
}

/// Immutable lookup of overrides by deployed-project name.
#[derive(Debug, Clone, Default)]
pub struct OverrideCatalog {
    entries: HashMap<String, ProjectOverride>,
}

impl OverrideCatalog {
    /// Validates each entry and indexes them by project name.
    ///
    /// # Errors
    ///
    /// Returns [`OverrideError::Invalid`] if an entry fails validation and
    /// [`OverrideError::Duplicate`] if two entries share a project name.
    pub fn from_overrides(overrides: Vec<ProjectOverride>) -> Result<Self, OverrideError> {
        let mut entries = HashMap::with_capacity(overrides.len());

        for entry in overrides {
            entry.validate().map_err(|source| OverrideError::Invalid {
                name: entry.project_name.clone(),
                source,
            })?;

            if entries.contains_key(&entry.project_name) {
                return Err(OverrideError::Duplicate(entry.project_name));
            }
            entries.insert(entry.project_name.clone(), entry);
        }

        Ok(Self { entries })
    }

    pub fn get(&self, project_name: &str) -> Option<&ProjectOverride> {
        self.entries.get(project_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
