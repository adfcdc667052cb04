//! Process wiring: cache backend, application state and the HTTP listener.

use crate::config::Config;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Picks the cache backend.
///
/// An unreachable Redis instance is not fatal: the service starts with
/// [`NullCache`] and every request goes upstream.
pub async fn connect_cache(config: &Config) -> Arc<dyn CacheService> {
    let Some(redis_url) = config.redis_url.as_deref() else {
        info!("REDIS_URL not set, upstream responses will not be cached");
        return Arc::new(NullCache::new());
    };

    match RedisCache::connect(redis_url).await {
        Ok(redis) => Arc::new(redis),
        Err(e) => {
            warn!(error = %e, "Redis unavailable, continuing without cache");
            Arc::new(NullCache::new())
        }
    }
}

/// Serves `/health` and `/api` until Ctrl-C.
///
/// # Errors
///
/// Fails when the override file is invalid, the listen address does not
/// parse or the socket cannot be bound.
pub async fn run(config: Config) -> Result<()> {
    let cache = connect_cache(&config).await;
    let state = AppState::from_config(&config, cache)?;

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("invalid LISTEN address {:?}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, behind_proxy = config.behind_proxy, "Listening");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Cannot listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
