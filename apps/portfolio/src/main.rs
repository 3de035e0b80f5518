mod config;
mod db;
mod errors;
mod models;
mod pages;
mod projection;
mod render;
mod routes;
mod state;
mod widgets;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{source_from_location, PortfolioStore};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    // Portfolio database: loaded once, shared by every page
    let source = source_from_location(&config.db_location);
    info!("Portfolio database source: {}", source.describe());
    let store = Arc::new(PortfolioStore::new(source));

    // Warm the cache; a failure here is retried on the first request
    match store.load_db().await {
        Ok(db) => info!(
            "Loaded portfolio for {} ({} projects, {} certifications)",
            db.profile.full_name,
            db.projects.len(),
            db.certifications.len()
        ),
        Err(e) => warn!("Initial portfolio load failed: {e}"),
    }

    let state = AppState {
        store,
        config: config.clone(),
    };

    let app = build_router(state).layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
