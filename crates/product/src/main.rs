use anyhow::{Context, Result};
use product::{config::myconfig::Config, handler::AppRouter, state::AppState};
use shared::{config::ConnectionManager, utils::init_logger};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    init_logger("product-service", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    info!("🚀 Starting Product Service initialization...");

    let pool = ConnectionManager::new_pool(&config.database_url)
        .await
        .context("Failed to initialize database pool")?;

    let state = Arc::new(AppState::new(pool));

    info!("✅ Application setup completed successfully.");

    AppRouter::serve(&config.app_addr, state.clone())
        .await
        .context("Failed to start server")?;

    state.shutdown().await;

    info!("✅ Product Service shutdown complete.");

    Ok(())
}
