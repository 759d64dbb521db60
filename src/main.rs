use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use cloud_tts_proxy::api::routes::{create_router, AppState};
use cloud_tts_proxy::config::Config;
use cloud_tts_proxy::tts::TtsClient;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration from environment, read once
    let config = Config::from_env();
    let addr = config.addr();

    tracing::info!("Cloud TTS proxy v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    match &config.provider_url {
        Some(url) => tracing::info!("TTS provider: {}", url),
        None => tracing::warn!("TTS_PROVIDER_URL is not set; conversion requests will fail"),
    }

    // Create provider client
    let tts = TtsClient::new(&config);

    // Create app state
    let state = Arc::new(AppState { tts });

    // Create router
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
