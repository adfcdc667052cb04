//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod projects;
pub mod screenshots;

pub use health::health_handler;
pub use projects::projects_handler;
pub use screenshots::capture_screenshots_handler;
