use std::env;
use std::sync::Arc;
use std::time::Duration;
use anyhow::Context;
use log::info;
use crate::api::AppState;
use crate::config::load_config;
use crate::logging::setup_logger;
use crate::manager_owm::OpenWeather;
use crate::predictor::ModelSlot;

mod api;
mod config;
mod errors;
mod logging;
mod manager_owm;
mod models;
mod oxygen;
mod predictor;
mod wind;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config_path = env::var("FIREWATCH_CONFIG").unwrap_or("config/config.toml".to_string());

    let config = load_config(&config_path)
        .with_context(|| format!("failed to load configuration from {}", config_path))?;
    setup_logger(&config.general)?;

    info!("firewatch version: {}", env!("CARGO_PKG_VERSION"));

    let owm = OpenWeather::new(&config.open_weather, Duration::from_secs(config.open_weather.timeout_secs))?;

    // Startup hook: Unloaded -> Ready, failure here aborts the process
    let model = ModelSlot::new();
    model.load(&config.model.classifier_path, &config.model.scaler_path)
        .context("failed to load model artifacts")?;

    let state = Arc::new(AppState { owm, model });
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_address))?;
    info!("listening on {}", config.server.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {}", e);
    }
}
