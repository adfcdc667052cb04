//! Loads the operator-authored override list from disk.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::domain::entities::{OverrideCatalog, ProjectOverride};

/// Reads a JSON array of overrides and builds the lookup catalog.
///
/// # Errors
///
/// Fails if the file cannot be read, is not a JSON array of override
/// objects, contains an invalid entry, or names a project twice.
pub fn load_overrides(path: &Path) -> Result<OverrideCatalog> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read overrides file {}", path.display()))?;

    let entries: Vec<ProjectOverride> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse overrides file {}", path.display()))?;

    let catalog = OverrideCatalog::from_overrides(entries)
        .with_context(|| format!("Invalid overrides file {}", path.display()))?;

    info!(path = %path.display(), count = catalog.len(), "Loaded project overrides");
    Ok(catalog)
}

/// Loads the catalog when a path is configured, otherwise returns an empty
/// one.
pub fn load_optional(path: Option<&Path>) -> Result<OverrideCatalog> {
    match path {
        Some(path) => load_overrides(path),
        None => Ok(OverrideCatalog::default()),
    }
}
