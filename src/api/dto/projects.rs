//! DTOs for the project listing endpoint.

use serde::Serialize;

use crate::domain::entities::EnrichedProject;

/// Response body of `GET /api/projects`.
#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    pub projects: Vec<EnrichedProject>,
    pub count: usize,
}

impl From<Vec<EnrichedProject>> for ProjectsResponse {
    fn from(projects: Vec<EnrichedProject>) -> Self {
        Self {
            count: projects.len(),
            projects,
        }
    }
}
