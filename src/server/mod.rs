use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer};
use tracing::{info, warn};

pub mod handlers;
pub mod state;

use crate::constants::PORTS_TO_CHECK;
use crate::utils::{local_url, open_browser};
pub use self::state::AppState;
use handlers::{get_screen, get_stations, health, index_html, regenerate_stations};

// Create the main application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_html))
        .route("/api/stations", get(get_stations))
        .route("/api/stations/regenerate", post(regenerate_stations))
        .route("/api/screen", get(get_screen))
        .route("/api/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

/// Binds the configured port first, then the fallbacks.
async fn bind_first_free(preferred: u16) -> Result<TcpListener> {
    let mut candidates = vec![preferred];
    candidates.extend(PORTS_TO_CHECK.iter().copied().filter(|p| *p != preferred));

    let mut last_error = None;
    for port in candidates {
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        match TcpListener::bind(addr).await {
            Ok(listener) => return Ok(listener),
            Err(e) => {
                warn!(port, "Port unavailable: {}", e);
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) => Err(e).context("No free port to bind the HTTP server"),
        None => anyhow::bail!("No ports configured"),
    }
}

pub async fn start_server(state: AppState) -> Result<()> {
    let auto_open = state.settings.auto_open_browser;
    let listener = bind_first_free(state.settings.port).await?;
    let port = listener.local_addr()?.port();
    let url = local_url(port);

    info!("HTTP server started at {}", url);
    info!("  GET  /api/stations?count=N       - generated stations");
    info!("  POST /api/stations/regenerate    - drop the screen's set and generate again");
    info!("  GET  /api/screen                 - camera region, options and markers");

    if auto_open {
        if let Err(e) = open_browser(&url) {
            warn!("Could not open browser: {}", e);
        }
    }

    let app = create_app(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
