//! Front (service-a) router — client-facing zipcode lookup.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use clima_app::ports::WeatherGateway;
use clima_domain::trace::TraceContext;
use clima_domain::weather::WeatherReport;

use crate::error::ApiError;
use crate::state::FrontState;

const SERVICE_NAME: &str = "service-a";

/// Request body for `POST /cep`.
#[derive(Deserialize)]
pub struct CepRequest {
    /// The raw zipcode to look up.
    pub cep: String,
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
    service: &'static str,
}

/// Build the front service router.
///
/// Includes the traceparent-extraction middleware and a [`TraceLayer`] that
/// logs each HTTP request/response through the `tracing` ecosystem.
pub fn router<G>(state: FrontState<G>) -> Router
where
    G: WeatherGateway + Send + Sync + 'static,
{
    Router::new()
        .route("/cep", post(lookup::<G>))
        .route("/health", get(health))
        .layer(axum::middleware::from_fn(crate::trace::propagate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `POST /cep`
///
/// A body that fails to parse as `{"cep": string}` maps to 400 before the
/// pipeline is ever invoked.
async fn lookup<G>(
    State(state): State<FrontState<G>>,
    Extension(ctx): Extension<TraceContext>,
    payload: Result<Json<CepRequest>, JsonRejection>,
) -> Result<Json<WeatherReport>, ApiError>
where
    G: WeatherGateway + Send + Sync + 'static,
{
    let Json(request) = payload.map_err(|_| ApiError::InvalidBody)?;
    let report = state.cep_service.weather_by_cep(ctx, &request.cep).await?;
    Ok(Json(report))
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        service: SERVICE_NAME,
    })
}
