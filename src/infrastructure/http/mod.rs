//! Outbound HTTP clients for the external data sources.
//!
//! - [`VercelClient`] - deployment provider (projects, domains)
//! - [`GitHubClient`] - code host (repository metadata)
//! - [`BlobStore`] - object store (stored screenshots)
//! - [`ApiFlashClient`] - capture provider (fresh screenshots)

mod apiflash;
mod blob_store;
mod github;
pub mod response;
mod vercel;

pub use apiflash::{ApiFlashClient, CAPTURE_DELAY_SECONDS, CAPTURE_HEIGHT, CAPTURE_WIDTH};
pub use blob_store::BlobStore;
pub use github::GitHubClient;
pub use response::build_client;
pub use vercel::VercelClient;
