//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Cache reachable or disabled, provider token configured
/// - **503 Service Unavailable**: Cache unreachable or provider token missing
///
/// The object store and capture provider are only needed by the capture
/// job; when unconfigured they report `disabled` without degrading the
/// overall status.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "cache": { "status": "ok", "message": "redis reachable" },
///     "deployment_provider": { "status": "ok", "message": "Token configured" },
///     "screenshot_store": { "status": "ok", "message": "Token configured" },
///     "screenshot_capture": { "status": "disabled", "message": "APIFLASH_ACCESS_KEY not set" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let cache = check_cache(&state).await;
    let credentials = state.credentials;

    let deployment_provider = if credentials.vercel {
        CheckStatus::ok("Token configured")
    } else {
        CheckStatus::error("VERCEL_TOKEN not set")
    };
    let screenshot_store = if credentials.blob {
        CheckStatus::ok("Token configured")
    } else {
        CheckStatus::disabled("BLOB_READ_WRITE_TOKEN not set")
    };
    let screenshot_capture = if credentials.apiflash {
        CheckStatus::ok("Access key configured")
    } else {
        CheckStatus::disabled("APIFLASH_ACCESS_KEY not set")
    };

    let all_healthy = !cache.is_error() && deployment_provider.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            cache,
            deployment_provider,
            screenshot_store,
            screenshot_capture,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Pings the cache backend; running without one is not a failure.
async fn check_cache(state: &AppState) -> CheckStatus {
    let backend = state.cache.backend();
    if backend == "none" {
        return CheckStatus::disabled("REDIS_URL not set");
    }

    if state.cache.health_check().await {
        CheckStatus::ok(format!("{backend} reachable"))
    } else {
        CheckStatus::error(format!("{backend} connection failed"))
    }
}
