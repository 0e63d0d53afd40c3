//! HTTP server for the recap engine.

use std::env;

use tracing::{Level, info};

use recap_engine::api::{AppState, create_router};
use recap_engine::config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let level = env::var("RECAP_LOG_LEVEL")
        .ok()
        .and_then(|value| value.parse::<Level>().ok())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let config_dir = env::var("RECAP_CONFIG_DIR").unwrap_or_else(|_| "./config".to_string());
    let bind_addr = env::var("RECAP_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let config = ConfigLoader::load(&config_dir)?.into_config();
    info!(config_dir = %config_dir, "Loaded recap configuration");

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(bind_addr = %bind_addr, "Recap engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
