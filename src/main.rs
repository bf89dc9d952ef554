//! Recommendation service binary
//!
//! Loads the model artifacts produced by `generate_model`, builds the
//! immutable application state and serves the HTTP API.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use moviematch::api::{create_router, AppState};
use moviematch::artifacts;
use moviematch::config::Config;
use moviematch::services::posters::{PosterResolver, TmdbPosterResolver};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let (catalog, similarity) = artifacts::load(config.artifacts_dir.as_ref())?;

    let posters: Arc<dyn PosterResolver> = Arc::new(TmdbPosterResolver::new(&config)?);
    let state = AppState::new(
        catalog,
        similarity,
        posters,
        config.placeholder_base_url.clone(),
    );

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(addr = %addr, "Recommendation service listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
