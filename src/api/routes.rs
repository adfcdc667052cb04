//! API route configuration.

use crate::api::handlers::{capture_screenshots_handler, projects_handler};
use crate::api::middleware::cron_auth;
use crate::state::AppState;
use axum::{Router, middleware, routing::get};

/// Public read routes.
///
/// # Endpoints
///
/// - `GET /projects` - Enriched project listing
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/projects", get(projects_handler))
}

/// Scheduler-triggered routes, gated by the cron secret.
///
/// # Endpoints
///
/// - `GET /cron/screenshots` - Capture and store fresh screenshots
pub fn cron_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/cron/screenshots", get(capture_screenshots_handler))
        .route_layer(middleware::from_fn_with_state(state, cron_auth::layer))
}
