#![allow(dead_code)]

use portfolio_projects::config::{Config, DEFAULT_INTERNAL_MARKER};
use portfolio_projects::infrastructure::cache::NullCache;
use portfolio_projects::state::AppState;
use reqwest::Client;
use std::sync::Arc;
use wiremock::MockServer;

pub const VERCEL_TOKEN: &str = "vercel-test-token";
pub const BLOB_TOKEN: &str = "blob-test-token";
pub const APIFLASH_KEY: &str = "apiflash-test-key";
pub const CRON_SECRET: &str = "cron-test-secret";

/// Configuration with every upstream pointed at `server`, each under its
/// own path prefix.
pub fn test_config(server: &MockServer) -> Config {
    let uri = server.uri();
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "debug".to_string(),
        log_format: "text".to_string(),
        behind_proxy: false,
        redis_url: None,
        vercel_token: Some(VERCEL_TOKEN.to_string()),
        vercel_api_url: format!("{uri}/vercel"),
        github_token: None,
        github_api_url: format!("{uri}/github"),
        github_default_owner: "owner".to_string(),
        blob_token: Some(BLOB_TOKEN.to_string()),
        blob_api_url: format!("{uri}/blob"),
        screenshot_api_key: None,
        screenshot_render_url: "https://render.example.com/take".to_string(),
        apiflash_access_key: Some(APIFLASH_KEY.to_string()),
        apiflash_api_url: format!("{uri}/apiflash"),
        cron_secret: None,
        internal_namespace_marker: DEFAULT_INTERNAL_MARKER.to_string(),
        project_overrides_path: None,
        enrich_concurrency: 4,
        capture_concurrency: 2,
        http_timeout_seconds: 5,
        capture_timeout_seconds: 5,
        projects_cache_ttl_seconds: 300,
        repository_cache_ttl_seconds: 3600,
    }
}

pub fn create_test_state(config: &Config) -> AppState {
    AppState::from_config(config, Arc::new(NullCache::new())).unwrap()
}

pub fn http_client() -> Client {
    Client::new()
}

pub fn vercel_project(id: &str, name: &str, updated_at: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "framework": "nextjs",
        "updatedAt": updated_at,
        "link": null,
        "targets": { "production": { "alias": [format!("{name}.vercel.app")] } }
    })
}
