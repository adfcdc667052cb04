//! Shared-secret gate for the scheduled capture trigger.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Rejects the request before any work is done unless it carries the
/// configured `CRON_SECRET` as a bearer token.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <CRON_SECRET>
/// ```
///
/// When no secret is configured (local or manual runs) every request
/// passes.
///
/// # Errors
///
/// Returns `401 Unauthorized` with `WWW-Authenticate: Bearer` if the header
/// is missing, malformed, or carries the wrong secret.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::cron_auth;
///
/// let cron = Router::new()
///     .route("/screenshots", get(capture_screenshots_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), cron_auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !st.cron_auth.is_enforced() {
        return Ok(next.run(req).await);
    }

    let (mut parts, body) = req.into_parts();

    let token = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|AuthBearer(token)| token);

    st.cron_auth.authorize(token.as_deref())?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}
