//! Screenshot capture job: render every live project and replace its
//! stored asset.

use chrono::{DateTime, Utc};
use futures::{StreamExt, stream};
use metrics::counter;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

use super::domain_resolver::DomainResolver;
use crate::domain::clients::{DeploymentProvider, ScreenshotCapture, ScreenshotStore};
use crate::domain::domain_selection::HostnamePolicy;
use crate::domain::entities::{DeployedProject, screenshot_key};
use crate::error::{AppError, UpstreamError};

/// Result for one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CaptureOutcome {
    Success { project: String, url: String },
    Skipped { project: String, reason: String },
    Error { project: String, error: String },
}

impl CaptureOutcome {
    pub fn project(&self) -> &str {
        match self {
            CaptureOutcome::Success { project, .. }
            | CaptureOutcome::Skipped { project, .. }
            | CaptureOutcome::Error { project, .. } => project,
        }
    }

    fn status(&self) -> &'static str {
        match self {
            CaptureOutcome::Success { .. } => "success",
            CaptureOutcome::Skipped { .. } => "skipped",
            CaptureOutcome::Error { .. } => "error",
        }
    }
}

/// Aggregate counts per outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CaptureSummary {
    pub total: usize,
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl CaptureSummary {
    pub fn from_outcomes(outcomes: &[CaptureOutcome]) -> Self {
        outcomes.iter().fold(
            Self {
                total: outcomes.len(),
                ..Self::default()
            },
            |mut summary, outcome| {
                match outcome {
                    CaptureOutcome::Success { .. } => summary.succeeded += 1,
                    CaptureOutcome::Skipped { .. } => summary.skipped += 1,
                    CaptureOutcome::Error { .. } => summary.failed += 1,
                }
                summary
            },
        )
    }

    pub fn message(&self) -> String {
        format!(
            "Screenshots captured: {} succeeded, {} failed, {} skipped",
            self.succeeded, self.failed, self.skipped
        )
    }
}

/// Full job report, in project listing order.
#[derive(Debug, Clone)]
pub struct CaptureReport {
    pub summary: CaptureSummary,
    pub results: Vec<CaptureOutcome>,
    pub finished_at: DateTime<Utc>,
}

/// Runs the capture job.
///
/// Each project is handled independently: a failed render or store call
/// becomes an [`CaptureOutcome::Error`] for that project and the job moves
/// on.
pub struct CaptureService<P, S, C>
where
    P: DeploymentProvider,
    S: ScreenshotStore,
    C: ScreenshotCapture,
{
    provider: Arc<P>,
    store: Arc<S>,
    capture: Arc<C>,
    domains: DomainResolver<P>,
    concurrency: usize,
    missing_credentials: Vec<&'static str>,
}

impl<P, S, C> CaptureService<P, S, C>
where
    P: DeploymentProvider,
    S: ScreenshotStore,
    C: ScreenshotCapture,
{
    pub fn new(
        provider: Arc<P>,
        store: Arc<S>,
        capture: Arc<C>,
        policy: HostnamePolicy,
        concurrency: usize,
    ) -> Self {
        Self {
            domains: DomainResolver::new(provider.clone(), policy),
            provider,
            store,
            capture,
            concurrency: concurrency.max(1),
            missing_credentials: Vec::new(),
        }
    }

    /// Names of credentials known to be absent; a non-empty list makes
    /// [`Self::run`] fail before any outbound call.
    pub fn with_missing_credentials(mut self, missing: Vec<&'static str>) -> Self {
        self.missing_credentials = missing;
        self
    }

    /// Captures and stores a fresh screenshot for every live project.
    ///
    /// # Errors
    ///
    /// Fails when a required credential is missing or the project listing
    /// itself fails.
    pub async fn run(&self) -> Result<CaptureReport, AppError> {
        if let Some(name) = self.missing_credentials.first() {
            error!(variable = *name, "Capture job is missing a credential");
            return Err(AppError::missing_credential(name));
        }

        let projects = self.provider.list_projects().await.map_err(|e| {
            error!(error = %e, "Capture job could not list deployed projects");
            AppError::from(e)
        })?;

        info!(count = projects.len(), "Starting screenshot capture");

        let results: Vec<CaptureOutcome> = stream::iter(
            projects
                .iter()
                .map(|project| self.capture_one(project))
                .collect::<Vec<_>>(),
        )
        .buffered(self.concurrency)
        .collect()
        .await;

        let summary = CaptureSummary::from_outcomes(&results);
        info!(
            succeeded = summary.succeeded,
            failed = summary.failed,
            skipped = summary.skipped,
            "Screenshot capture finished"
        );

        Ok(CaptureReport {
            summary,
            results,
            finished_at: Utc::now(),
        })
    }

    async fn capture_one(&self, project: &DeployedProject) -> CaptureOutcome {
        let outcome = match self.domains.resolve_live_url(project).await {
            None => CaptureOutcome::Skipped {
                project: project.name.clone(),
                reason: "No live URL".to_string(),
            },
            Some(live_url) => match self.replace_screenshot(&project.name, &live_url).await {
                Ok(url) => {
                    info!(project = %project.name, %url, "Stored screenshot");
                    CaptureOutcome::Success {
                        project: project.name.clone(),
                        url,
                    }
                }
                Err(e) => {
                    warn!(project = %project.name, error = %e, "Screenshot capture failed");
                    CaptureOutcome::Error {
                        project: project.name.clone(),
                        error: e.to_string(),
                    }
                }
            },
        };

        counter!("screenshot_captures_total", "status" => outcome.status()).increment(1);
        outcome
    }

    /// Renders `live_url`, removes whatever is stored under the project's
    /// key, then stores the new image.
    async fn replace_screenshot(
        &self,
        project_name: &str,
        live_url: &str,
    ) -> Result<String, UpstreamError> {
        let bytes = self.capture.capture(live_url).await?;
        let key = screenshot_key(project_name);

        self.store.delete(&key).await?;
        let stored = self.store.put(&key, bytes).await?;
        Ok(stored.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clients::{
        MockDeploymentProvider, MockScreenshotCapture, MockScreenshotStore,
    };
    use crate::domain::entities::{ProjectDomain, StoredScreenshot};
    use std::collections::HashMap;
    use std::sync::Mutex;

    fn provider_with(names: &'static [&'static str]) -> MockDeploymentProvider {
        let mut provider = MockDeploymentProvider::new();
        provider.expect_list_projects().returning(move || {
            Ok(names
                .iter()
                .map(|n| DeployedProject::new(format!("id_{n}"), *n))
                .collect())
        });
        provider.expect_list_domains().returning(|id| {
            if id == "id_offline" {
                Ok(vec![])
            } else {
                Ok(vec![ProjectDomain::new(
                    format!("{}.example.com", id.trim_start_matches("id_")),
                    true,
                )])
            }
        });
        provider
    }

    fn service(
        provider: MockDeploymentProvider,
        store: MockScreenshotStore,
        capture: MockScreenshotCapture,
    ) -> CaptureService<MockDeploymentProvider, MockScreenshotStore, MockScreenshotCapture> {
        CaptureService::new(
            Arc::new(provider),
            Arc::new(store),
            Arc::new(capture),
            HostnamePolicy::new("acme-internal"),
            2,
        )
    }

    #[tokio::test]
    async fn test_outcomes_and_summary() {
        let mut capture = MockScreenshotCapture::new();
        capture.expect_capture().returning(|url| {
            if url.contains("broken") {
                Err(UpstreamError::Api {
                    status: 500,
                    message: "render failed".to_string(),
                })
            } else {
                Ok(vec![0x89, 0x50, 0x4e, 0x47])
            }
        });

        let mut store = MockScreenshotStore::new();
        store.expect_delete().returning(|_| Ok(0));
        store.expect_put().returning(|path, _| {
            Ok(StoredScreenshot {
                pathname: path.to_string(),
                url: format!("https://blob.example.com/{path}"),
            })
        });

        let report = service(
            provider_with(&["site", "broken", "offline"]),
            store,
            capture,
        )
        .run()
        .await
        .unwrap();

        assert_eq!(
            report.summary,
            CaptureSummary {
                total: 3,
                succeeded: 1,
                skipped: 1,
                failed: 1
            }
        );
        assert_eq!(
            report.results[0],
            CaptureOutcome::Success {
                project: "site".to_string(),
                url: "https://blob.example.com/screenshots/site.png".to_string(),
            }
        );
        assert!(matches!(report.results[1], CaptureOutcome::Error { .. }));
        assert!(matches!(report.results[2], CaptureOutcome::Skipped { .. }));
        assert_eq!(
            report.summary.message(),
            "Screenshots captured: 1 succeeded, 1 failed, 1 skipped"
        );
    }

    #[tokio::test]
    async fn test_store_failure_is_isolated() {
        let mut capture = MockScreenshotCapture::new();
        capture.expect_capture().returning(|_| Ok(vec![1, 2, 3]));

        let mut store = MockScreenshotStore::new();
        store.expect_delete().returning(|path| {
            if path.contains("first") {
                Err(UpstreamError::Api {
                    status: 403,
                    message: "forbidden".to_string(),
                })
            } else {
                Ok(1)
            }
        });
        store.expect_put().returning(|path, _| {
            Ok(StoredScreenshot {
                pathname: path.to_string(),
                url: format!("https://blob.example.com/{path}"),
            })
        });

        let report = service(provider_with(&["first", "second"]), store, capture)
            .run()
            .await
            .unwrap();

        assert!(matches!(report.results[0], CaptureOutcome::Error { .. }));
        assert!(matches!(report.results[1], CaptureOutcome::Success { .. }));
    }

    #[tokio::test]
    async fn test_second_run_replaces_instead_of_accumulating() {
        let stored: Arc<Mutex<HashMap<String, usize>>> = Arc::default();
        let deletes = Arc::new(Mutex::new(0usize));

        let mut store = MockScreenshotStore::new();
        {
            let stored = stored.clone();
            let deletes = deletes.clone();
            store.expect_delete().returning(move |path| {
                *deletes.lock().unwrap() += 1;
                Ok(stored.lock().unwrap().remove(path).unwrap_or(0))
            });
        }
        {
            let stored = stored.clone();
            store.expect_put().returning(move |path, _| {
                *stored.lock().unwrap().entry(path.to_string()).or_insert(0) += 1;
                Ok(StoredScreenshot {
                    pathname: path.to_string(),
                    url: format!("https://blob.example.com/{path}"),
                })
            });
        }

        let mut capture = MockScreenshotCapture::new();
        capture.expect_capture().returning(|_| Ok(vec![1]));

        let job = service(provider_with(&["a", "b"]), store, capture);
        job.run().await.unwrap();
        job.run().await.unwrap();

        let stored = stored.lock().unwrap();
        assert_eq!(stored.len(), 2);
        assert!(stored.values().all(|count| *count == 1));
        assert_eq!(*deletes.lock().unwrap(), 4);
    }

    #[tokio::test]
    async fn test_listing_failure_aborts() {
        let mut provider = MockDeploymentProvider::new();
        provider
            .expect_list_projects()
            .returning(|| Err(UpstreamError::MissingCredential("VERCEL_TOKEN")));

        let result = service(
            provider,
            MockScreenshotStore::new(),
            MockScreenshotCapture::new(),
        )
        .run()
        .await;

        assert!(matches!(result, Err(AppError::MissingCredential { .. })));
    }

    #[tokio::test]
    async fn test_missing_credential_stops_before_listing() {
        let provider = MockDeploymentProvider::new();

        let result = service(
            provider,
            MockScreenshotStore::new(),
            MockScreenshotCapture::new(),
        )
        .with_missing_credentials(vec!["APIFLASH_ACCESS_KEY"])
        .run()
        .await;

        match result {
            Err(e @ AppError::MissingCredential { .. }) => {
                assert_eq!(e.to_error_info().details["variable"], "APIFLASH_ACCESS_KEY");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(CaptureOutcome::Skipped {
            project: "demo".to_string(),
            reason: "No live URL".to_string(),
        })
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "status": "skipped", "project": "demo", "reason": "No live URL" })
        );
    }
}
