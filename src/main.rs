// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::page_service::PageService;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::host_document::load_host_document;
use crate::infrastructure::static_source::StaticDashboardSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let settings = load_dashboard_config()?;
    let host = load_host_document(settings.page.host_document.as_deref()).await?;
    tracing::info!(
        "Host document: {} (anchor #{})",
        host.origin,
        settings.page.anchor_id
    );

    // Create services (application layer)
    let page_service = PageService::new(
        Arc::new(StaticDashboardSource),
        host,
        settings.page.anchor_id,
    );

    // Create application state
    let state = Arc::new(AppState { page_service });

    // Build router (presentation layer)
    let router = router(state);

    // Start server
    let addr: SocketAddr = settings
        .server
        .bind
        .parse()
        .with_context(|| format!("invalid bind address {}", settings.server.bind))?;
    tracing::info!("Starting innovation-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
