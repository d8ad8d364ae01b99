use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use station_map::server::{start_server, AppState};
use station_map::settings::Settings;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("station_map=info,tower_http=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    info!("StationMap v{} starting...", env!("CARGO_PKG_VERSION"));

    let config_path = Settings::config_path();
    let settings = Settings::load_from(&config_path)
        .with_context(|| format!("Failed to load settings from {}", config_path.display()))?;
    if !config_path.exists() {
        match settings.save_to(&config_path) {
            Ok(()) => info!("Wrote default config to {}", config_path.display()),
            Err(e) => warn!("Could not write default config: {:#}", e),
        }
    }
    info!(
        port = settings.port,
        station_count = settings.station_count,
        seed = ?settings.seed,
        "Settings loaded"
    );

    let app_state = AppState::new(settings);
    start_server(app_state).await?;

    Ok(())
}
