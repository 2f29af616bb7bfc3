mod config;
mod enhancement;
mod errors;
mod extract;
mod models;
mod resumes;
mod routes;
mod state;

use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::enhancement::engine::TemplateEnhancer;
use crate::resumes::store::ResumeStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Editor API v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(ResumeStore::new(&config.storage_dir, config.id_strategy));
    info!(
        "Resume store mirroring to {} (ids: {:?})",
        store.storage_dir().display(),
        config.id_strategy
    );

    let addr = config.socket_addr()?;

    let state = AppState {
        store,
        enhancer: Arc::new(TemplateEnhancer),
        config,
    };

    let app = build_router(state)?.layer(TraceLayer::new_for_http());

    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
