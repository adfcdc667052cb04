//! DTOs for the screenshot capture trigger.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::{CaptureOutcome, CaptureReport, CaptureSummary};

/// Response body of `GET /api/cron/screenshots`.
///
/// # Example
///
/// ```json
/// {
///   "message": "Screenshots captured: 1 succeeded, 0 failed, 1 skipped",
///   "summary": { "total": 2, "succeeded": 1, "skipped": 1, "failed": 0 },
///   "results": [
///     { "status": "success", "project": "inked", "url": "https://.../screenshots/inked.png" },
///     { "status": "skipped", "project": "scratch", "reason": "No live URL" }
///   ],
///   "timestamp": "2025-01-01T00:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct CaptureResponse {
    pub message: String,
    pub summary: CaptureSummary,
    pub results: Vec<CaptureOutcome>,
    pub timestamp: DateTime<Utc>,
}

impl From<CaptureReport> for CaptureResponse {
    fn from(report: CaptureReport) -> Self {
        Self {
            message: report.summary.message(),
            summary: report.summary,
            results: report.results,
            timestamp: report.finished_at,
        }
    }
}
