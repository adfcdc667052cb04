//! Core data structures of the aggregation pipeline.

mod deployed_project;
mod enriched_project;
mod project_override;
mod repository_metadata;
mod stored_screenshot;

pub use deployed_project::{DeployedProject, LinkedRepository, ProjectDomain};
pub use enriched_project::EnrichedProject;
pub use project_override::{OverrideCatalog, OverrideError, ProjectOverride};
pub use repository_metadata::{RepositoryMetadata, RepositoryRef};
pub use stored_screenshot::{SCREENSHOT_PREFIX, ScreenshotIndex, StoredScreenshot, screenshot_key};
