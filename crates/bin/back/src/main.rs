//! # clima-back — service-b
//!
//! Composition root for the pipeline service.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars); refuse to start without a
//!   weather API key
//! - Initialize the tracing subscriber
//! - Construct the upstream clients (adapters)
//! - Construct the pipeline service, injecting the clients via port traits
//! - Build the axum router, bind, and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is a wiring layer — no domain logic belongs here.

use clima_adapter_http_axum::back;
use clima_adapter_http_axum::state::BackState;
use clima_adapter_upstream_reqwest::{ViaCepClient, WeatherApiClient};
use clima_app::services::weather_service::WeatherService;
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let locality = ViaCepClient::new(config.upstream.viacep_url.clone());
    let temperature = WeatherApiClient::new(
        config.upstream.weather_api_url.clone(),
        config.upstream.weather_api_key.clone(),
    );
    let state = BackState::new(WeatherService::new(locality, temperature));
    let app = back::router(state);

    let bind_addr = config.bind_addr();
    tracing::info!(
        %bind_addr,
        viacep_url = %config.upstream.viacep_url,
        weather_api_url = %config.upstream.weather_api_url,
        "clima-back listening"
    );

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
