//! Business logic services for the application layer.

pub mod capture_service;
pub mod cron_auth;
pub mod domain_resolver;
pub mod project_service;
pub mod repository_resolver;
pub mod screenshot_locator;

pub use capture_service::{CaptureOutcome, CaptureReport, CaptureService, CaptureSummary};
pub use cron_auth::CronAuth;
pub use domain_resolver::DomainResolver;
pub use project_service::{EnrichmentOptions, ProjectService};
pub use repository_resolver::RepositoryResolver;
pub use screenshot_locator::{RenderService, ScreenshotLocator};
