use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// Import modules
mod constants;
mod feed;
mod layers;
mod renderer;
mod scale;
mod server;
mod settings;
mod utils;

#[cfg(test)]
mod test_support;

use feed::FeedClient;
use renderer::MapRenderer;
use server::{bind, start_server, AppState};
use settings::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🗺️  QuakeMap v{} starting...", env!("CARGO_PKG_VERSION"));

    let config_path = Settings::config_path();
    let settings = Settings::load().with_context(|| format!("Failed to load {}", config_path.display()))?;
    if config_path.exists() {
        info!("⚙️  Settings from {}", config_path.display());
    } else if let Err(e) = settings.save_to(&config_path) {
        warn!("⚠️  Could not write default settings: {:#}", e);
    } else {
        info!("⚙️  Wrote default settings to {}", config_path.display());
    }
    info!("   🌋 Earthquake feed: {}/all_<time_frame>.geojson", settings.earthquake_feed_base);
    info!("   🧩 Plate boundaries: {}", settings.plates_url);
    info!("   ⏱️  Default time frame: {}", settings.default_time_frame);

    let client = FeedClient::new(&settings).context("Failed to build HTTP client")?;
    let listener = bind(settings.port)
        .await
        .with_context(|| format!("Failed to bind port {}", settings.port))?;
    let url = format!("http://{}", listener.local_addr()?);

    if settings.auto_open_browser {
        if let Err(e) = utils::open_browser(&url) {
            warn!("⚠️  Could not open browser at {}: {}", url, e);
        }
    }

    let app_state = AppState {
        renderer: Arc::new(MapRenderer::new(client)),
        settings: Arc::new(settings),
    };

    start_server(app_state, listener).await?;

    Ok(())
}
