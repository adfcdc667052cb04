//! Handler for the enriched project listing.

use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::api::dto::projects::ProjectsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Shared-cache policy for the listing: five minutes fresh, ten more
/// minutes served stale while revalidating.
pub const PROJECTS_CACHE_CONTROL: &str = "public, s-maxage=300, stale-while-revalidate=600";

/// Returns every deployed project, enriched and sorted newest first.
///
/// # Endpoint
///
/// `GET /api/projects`
///
/// # Response
///
/// ```json
/// {
///   "projects": [
///     {
///       "id": "prj_123",
///       "title": "My Cool App",
///       "description": "Next.js application deployed on Vercel",
///       "techStack": ["Next.js", "TypeScript"],
///       "liveUrl": "https://mycoolapp.dev",
///       "githubUrl": "https://github.com/owner/my-cool-app",
///       "updatedAt": "2025-01-01T00:00:00Z",
///       "featured": false
///     }
///   ],
///   "count": 1
/// }
/// ```
///
/// # Errors
///
/// - `500 missing_credential` - `VERCEL_TOKEN` is not configured
/// - `502 upstream_error` - the project listing itself failed
pub async fn projects_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let projects = state.project_service.list_projects().await?;

    Ok((
        [(header::CACHE_CONTROL, PROJECTS_CACHE_CONTROL)],
        Json(ProjectsResponse::from(projects)),
    ))
}
