mod analysis;
mod config;
mod errors;
mod models;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::{HttpPostingFetcher, Lexicon, ProfilePipeline};
use crate::config::Config;
use crate::routes::build_app;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Malformed env values fail here, before anything binds
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting posting profiler v{}", env!("CARGO_PKG_VERSION"));

    let lexicon = Arc::new(Lexicon::builtin());
    info!(
        "Lexicon loaded: {} skills across {} categories",
        lexicon.skills().len(),
        lexicon.categories().len()
    );

    let pipeline = ProfilePipeline::new(lexicon).context("Failed to compile analysis pipeline")?;

    let fetcher = HttpPostingFetcher::new(
        config.allowed_fetch_hosts.clone(),
        config.fetch_timeout,
        config.fetch_max_bytes,
    )
    .context("Failed to build posting fetcher")?;
    if config.allowed_fetch_hosts.is_empty() {
        info!("Posting fetcher accepts any public host");
    } else {
        info!("Posting fetcher restricted to {:?}", config.allowed_fetch_hosts);
    }

    let state = AppState {
        config: config.clone(),
        pipeline: Arc::new(pipeline),
        fetcher: Arc::new(fetcher),
    };

    let app = build_app(state)?;

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
