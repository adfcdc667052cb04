//! Preview-image lookup for the read path.

use tracing::warn;
use url::Url;

use crate::domain::entities::ScreenshotIndex;

/// Read-time render service: endpoint plus access key.
#[derive(Debug, Clone)]
pub struct RenderService {
    pub endpoint: String,
    pub access_key: String,
}

impl RenderService {
    /// Render URL for `live_url` at 1920x1080 with ad, cookie-banner and
    /// tracker blocking, cached on the provider side.
    pub fn render_url(&self, live_url: &str) -> Option<String> {
        let params = [
            ("access_key", self.access_key.as_str()),
            ("url", live_url),
            ("viewport_width", "1920"),
            ("viewport_height", "1080"),
            ("device_scale_factor", "1"),
            ("format", "jpg"),
            ("block_ads", "true"),
            ("block_cookie_banners", "true"),
            ("block_trackers", "true"),
            ("cache", "true"),
            ("full_page", "false"),
        ];

        match Url::parse_with_params(&self.endpoint, &params) {
            Ok(url) => Some(url.into()),
            Err(e) => {
                warn!(endpoint = %self.endpoint, error = %e, "Invalid render endpoint");
                None
            }
        }
    }
}

/// Resolves a project's preview image without touching the network.
#[derive(Debug, Clone, Default)]
pub struct ScreenshotLocator {
    render: Option<RenderService>,
}

impl ScreenshotLocator {
    /// `render` is `None` when no render key is configured.
    pub fn new(render: Option<RenderService>) -> Self {
        Self { render }
    }

    /// Stored asset first; otherwise a render URL when both a live URL and
    /// a render key are available.
    pub fn locate(
        &self,
        project_name: &str,
        live_url: Option<&str>,
        index: &ScreenshotIndex,
    ) -> Option<String> {
        if let Some(stored) = index.url_for(project_name) {
            return Some(stored.to_string());
        }

        let render = self.render.as_ref()?;
        render.render_url(live_url?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::StoredScreenshot;

    fn locator() -> ScreenshotLocator {
        ScreenshotLocator::new(Some(RenderService {
            endpoint: "https://render.example.com/take".to_string(),
            access_key: "key123".to_string(),
        }))
    }

    fn index_with_demo() -> ScreenshotIndex {
        ScreenshotIndex::new(vec![StoredScreenshot {
            pathname: "screenshots/demo.png".to_string(),
            url: "https://blob.example.com/screenshots/demo.png".to_string(),
        }])
    }

    #[test]
    fn test_stored_asset_wins_over_render() {
        let url = locator().locate("demo", Some("https://demo.dev"), &index_with_demo());

        assert_eq!(
            url.as_deref(),
            Some("https://blob.example.com/screenshots/demo.png")
        );
    }

    #[test]
    fn test_render_url_when_nothing_stored() {
        let url = locator()
            .locate("other", Some("https://other.dev/?a=1"), &index_with_demo())
            .unwrap();
        let parsed = Url::parse(&url).unwrap();
        let query: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();

        assert!(url.starts_with("https://render.example.com/take?"));
        assert!(query.contains(&("url".to_string(), "https://other.dev/?a=1".to_string())));
        assert!(query.contains(&("viewport_width".to_string(), "1920".to_string())));
        assert!(query.contains(&("block_trackers".to_string(), "true".to_string())));
        assert!(query.contains(&("cache".to_string(), "true".to_string())));
    }

    #[test]
    fn test_no_live_url_no_image() {
        assert!(locator().locate("other", None, &index_with_demo()).is_none());
    }

    #[test]
    fn test_no_render_key_no_image() {
        let locator = ScreenshotLocator::new(None);
        assert!(
            locator
                .locate("other", Some("https://other.dev"), &ScreenshotIndex::default())
                .is_none()
        );
    }
}
