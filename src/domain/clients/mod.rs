//! Client trait definitions for the external data sources.
//!
//! The pipeline talks to four collaborators: the deployment provider, the
//! code host, the object store and the capture provider. Concrete clients
//! live in `crate::infrastructure::http`; mocks are generated with `mockall`
//! for unit tests.

pub mod deployment_provider;
pub mod repository_host;
pub mod screenshot_capture;
pub mod screenshot_store;

pub use deployment_provider::DeploymentProvider;
pub use repository_host::RepositoryHost;
pub use screenshot_capture::ScreenshotCapture;
pub use screenshot_store::ScreenshotStore;

#[cfg(test)]
pub use deployment_provider::MockDeploymentProvider;
#[cfg(test)]
pub use repository_host::MockRepositoryHost;
#[cfg(test)]
pub use screenshot_capture::MockScreenshotCapture;
#[cfg(test)]
pub use screenshot_store::MockScreenshotStore;
