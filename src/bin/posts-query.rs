// Copyright (c) 2025 - Cowboy AI, Inc.
//! Posts Query Service
//!
//! Serves the post/comment read model over HTTP and keeps it current from the
//! event bus.
//!
//! Startup order:
//! 1. Bind the listener (the only fatal failure)
//! 2. Spawn the bootstrap replay of `GET {EVENT_BUS_URL}/events`
//! 3. Serve `/posts`, `/events` and `/health` while replay runs
//!
//! Run with: cargo run --bin posts-query

use anyhow::{Context, Result};
use posts_query::{
    http, BootstrapLoader, HttpEventSource, ProjectionStore, QueryConfig, QueryService,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("🚀 Starting Posts Query Service");

    let config = QueryConfig::from_env().context("Invalid configuration")?;
    info!("📋 Configuration loaded:");
    info!("  - Listen: {}", config.bind_addr());
    info!("  - Event bus: {}", config.event_bus_url);
    info!("  - Bootstrap: {:?}", config.retry_policy());

    let source = HttpEventSource::new(&config.event_bus_url, config.fetch_timeout())
        .context("Failed to create event bus client")?;

    let service = QueryService::new(ProjectionStore::new());
    let app = http::router(service.clone(), &config.cors_allowed_origins);

    let listener = http::bind(&config.bind_addr()).await?;
    let local_addr = listener
        .local_addr()
        .context("Failed to read listener address")?;
    info!("✅ Query service listening on {}", local_addr);

    let loader = BootstrapLoader::new(source, config.retry_policy());
    let bootstrap_service = service.clone();
    tokio::spawn(async move {
        bootstrap_service.bootstrap(&loader).await;
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("👋 Query service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("⚠️ Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
