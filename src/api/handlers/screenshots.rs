//! Handler for the scheduled screenshot capture.

use axum::{Json, extract::State};

use crate::api::dto::capture::CaptureResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Captures a fresh screenshot for every live project and replaces the
/// stored asset.
///
/// # Endpoint
///
/// `GET /api/cron/screenshots`
///
/// Guarded by [`crate::api::middleware::cron_auth`]; per-project failures
/// are reported in `results`, not as an error status.
///
/// # Errors
///
/// - `401 unauthorized` - `CRON_SECRET` is set and the bearer token does not match
/// - `500 missing_credential` - a capture credential is not configured
/// - `502 upstream_error` - the project listing failed
pub async fn capture_screenshots_handler(
    State(state): State<AppState>,
) -> Result<Json<CaptureResponse>, AppError> {
    let report = state.capture_service.run().await?;
    Ok(Json(CaptureResponse::from(report)))
}
