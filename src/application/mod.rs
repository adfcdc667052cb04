//! Application layer services implementing the aggregation pipeline.
//!
//! Services consume the client traits from [`crate::domain::clients`] and
//! provide a clean API for HTTP handlers and the operator CLI.
//!
//! # Available Services
//!
//! - [`services::project_service::ProjectService`] - Enriched project listing
//! - [`services::capture_service::CaptureService`] - Screenshot capture job
//! - [`services::cron_auth::CronAuth`] - Shared-secret gate for the capture trigger

pub mod services;
