//! Padlock - a tiny HTTP server that reveals secrets once timers run out
//!
//! This is the main entry point for the padlock application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use padlock::{
    api::create_router_with_static,
    clock::SystemClock,
    config::Config,
    padlock::CHANNELS,
    state::AppState,
    store::JsonFileStore,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("padlock={},tower_http=info", config.log_level()))
        .init();

    info!("Starting padlock server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, data_file={}, static_dir={}",
          config.host, config.port, config.data_file.display(), config.static_dir.display());
    for channel in CHANNELS {
        info!("Channel {}: delay={}s", channel.name, channel.delay);
    }

    let store = Arc::new(JsonFileStore::new(config.data_file.clone()));
    let state = Arc::new(AppState::new(
        store,
        Arc::new(SystemClock),
        config.port,
        config.host.clone(),
    ));

    let app = create_router_with_static(state, &config.static_dir);

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET /start    - Start the timer and redirect to /status");
    info!("  GET /reset    - Stop the timer");
    info!("  GET /status   - Show every padlock");
    info!("  GET /health   - Health check");
    info!("  GET /static/* - Static files");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
