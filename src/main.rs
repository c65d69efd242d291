use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use festival_chat_relay::{config::AppConfig, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().context("failed to read configuration")?;
    info!(?config, "loaded configuration");
    if !config.has_credentials() {
        warn!("DASHSCOPE_API_KEY is not set; chat requests will fail with 500 until it is");
    }

    let state = AppState::new(&config).context("failed to build completion client")?;

    let app = routes::create_router()
        .with_state(Arc::new(state))
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to address: {}", config.bind_addr))?;

    info!(
        "festival chat relay listening on {}",
        listener
            .local_addr()
            .context("failed to get local address")?
    );

    axum::serve(listener, app)
        .await
        .context("failed to start server")?;

    Ok(())
}
