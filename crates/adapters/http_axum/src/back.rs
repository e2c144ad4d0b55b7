//! Back (service-b) router — the in-process pipeline endpoint.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use clima_app::ports::{LocalityResolver, TemperatureProbe};
use clima_domain::trace::TraceContext;
use clima_domain::weather::WeatherReport;

use crate::error::ApiError;
use crate::state::BackState;

const SERVICE_NAME: &str = "service-b";

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
    service: &'static str,
}

/// Build the back service router.
pub fn router<L, T>(state: BackState<L, T>) -> Router
where
    L: LocalityResolver + Send + Sync + 'static,
    T: TemperatureProbe + Send + Sync + 'static,
{
    Router::new()
        .route("/weather/{zipcode}", get(weather::<L, T>))
        .route("/health", get(health))
        .layer(axum::middleware::from_fn(crate::trace::propagate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /weather/{zipcode}`
async fn weather<L, T>(
    State(state): State<BackState<L, T>>,
    Extension(ctx): Extension<TraceContext>,
    Path(zipcode): Path<String>,
) -> Result<Json<WeatherReport>, ApiError>
where
    L: LocalityResolver + Send + Sync + 'static,
    T: TemperatureProbe + Send + Sync + 'static,
{
    let report = state
        .weather_service
        .weather_by_zipcode(ctx, &zipcode)
        .await?;
    Ok(Json(report))
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        service: SERVICE_NAME,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use clima_app::services::weather_service::WeatherService;
    use clima_domain::cep::Cep;
    use clima_domain::error::ClimaError;
    use clima_domain::locality::Locality;

    struct StubLocality(Result<&'static str, ClimaError>);

    impl LocalityResolver for StubLocality {
        async fn resolve_locality(
            &self,
            _ctx: TraceContext,
            _cep: &Cep,
        ) -> Result<Locality, ClimaError> {
            self.0.clone().map(|name| Locality::new(name).unwrap())
        }
    }

    struct StubTemperature(Result<f64, ClimaError>);

    impl TemperatureProbe for StubTemperature {
        async fn current_celsius(
            &self,
            _ctx: TraceContext,
            _locality: &Locality,
        ) -> Result<f64, ClimaError> {
            self.0.clone()
        }
    }

    fn app(
        locality: Result<&'static str, ClimaError>,
        temperature: Result<f64, ClimaError>,
    ) -> Router {
        let service = WeatherService::new(
            Arc::new(StubLocality(locality)),
            Arc::new(StubTemperature(temperature)),
        );
        router(BackState::new(service))
    }

    fn get_weather(zipcode: &str) -> Request<Body> {
        Request::builder()
            .uri(format!("/weather/{zipcode}"))
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_report_health_as_service_b() {
        let response = app(Ok("São Paulo"), Ok(25.0))
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"status": "ok", "service": "service-b"}));
    }

    #[tokio::test]
    async fn should_return_report_for_valid_zipcode() {
        let response = app(Ok("São Paulo"), Ok(25.0))
            .oneshot(get_weather("01310100"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({
                "city": "São Paulo",
                "temp_C": 25.0,
                "temp_F": 77.0,
                "temp_K": 298.0,
            })
        );
    }

    #[tokio::test]
    async fn should_map_invalid_zipcode_to_422() {
        let response = app(Ok("São Paulo"), Ok(25.0))
            .oneshot(get_weather("123"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"error": "invalid zipcode"}));
    }

    #[tokio::test]
    async fn should_map_locality_failure_to_404() {
        let response = app(Err(ClimaError::ZipcodeNotFound), Ok(25.0))
            .oneshot(get_weather("00000000"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"error": "can not find zipcode"}));
    }

    #[tokio::test]
    async fn should_map_locality_outage_to_404_as_well() {
        let response = app(
            Err(ClimaError::UpstreamUnavailable { service: "viacep" }),
            Ok(25.0),
        )
        .oneshot(get_weather("01310100"))
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_map_temperature_failure_to_500() {
        let response = app(
            Ok("São Paulo"),
            Err(ClimaError::internal("weather api status 500")),
        )
        .oneshot(get_weather("01310100"))
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"error": "internal server error"}));
    }
}
