//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`               - Health check: cache and credentials (public)
//! - `GET /api/projects`         - Enriched project listing (public, rate limited)
//! - `GET /api/cron/screenshots` - Screenshot capture (cron secret when configured)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Cron gate** - Bearer shared secret on the capture trigger
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let public = api::routes::public_routes();
    let public = if behind_proxy {
        public.layer(rate_limit::proxied_layer())
    } else {
        public.layer(rate_limit::layer())
    };

    let api_router = Router::new()
        .merge(public)
        .merge(api::routes::cron_routes(state.clone()));

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
