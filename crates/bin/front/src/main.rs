//! # clima-front — service-a
//!
//! Composition root for the client-facing service.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize the tracing subscriber
//! - Construct the back-service gateway client (adapter)
//! - Construct the front application service, injecting the gateway via its
//!   port trait
//! - Build the axum router, bind, and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is a wiring layer — no domain logic belongs here.

use clima_adapter_http_axum::front;
use clima_adapter_http_axum::state::FrontState;
use clima_adapter_upstream_reqwest::BackServiceClient;
use clima_app::services::cep_service::CepService;
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let gateway = BackServiceClient::new(config.weather_service_url());
    let state = FrontState::new(CepService::new(gateway));
    let app = front::router(state);

    let bind_addr = config.bind_addr();
    tracing::info!(
        %bind_addr,
        weather_service_url = config.weather_service_url(),
        "clima-front listening"
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
