//! Persisted preview images and their naming convention.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Path prefix shared by every stored screenshot.
pub const SCREENSHOT_PREFIX: &str = "screenshots/";

/// Object-store key for a project's screenshot: `screenshots/<name>.png`.
pub fn screenshot_key(project_name: &str) -> String {
    format!("{SCREENSHOT_PREFIX}{project_name}.png")
}

/// An image asset in the object store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredScreenshot {
    pub pathname: String,
    pub url: String,
}

/// Snapshot of the stored screenshots, indexed by pathname.
///
/// Built once per invocation from a single listing call.
#[derive(Debug, Clone, Default)]
pub struct ScreenshotIndex {
    by_pathname: HashMap<String, String>,
}

impl ScreenshotIndex {
    pub fn new(screenshots: Vec<StoredScreenshot>) -> Self {
        let by_pathname = screenshots
            .into_iter()
            .map(|s| (s.pathname, s.url))
            .collect();
        Self { by_pathname }
    }

    /// Public URL of the screenshot stored for `project_name`, if any.
    pub fn url_for(&self, project_name: &str) -> Option<&str> {
        self.by_pathname
            .get(&screenshot_key(project_name))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_pathname.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_pathname.is_empty()
    }
}
