//! Back-service client — the front service's remote pipeline invocation.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::Span;
use tracing::field::Empty;

use clima_app::ports::WeatherGateway;
use clima_domain::cep::Cep;
use clima_domain::error::ClimaError;
use clima_domain::trace::{TRACEPARENT_HEADER, TraceContext};
use clima_domain::weather::WeatherReport;

/// Reqwest-backed gateway calling the back service's weather endpoint.
///
/// Failure statuses carry a `{"error": …}` body; the taxonomy kind is
/// recovered from the status tag (422 → invalid, 404 → not found, anything
/// else → internal with the embedded message). An undecodable error body
/// synthesizes an internal error carrying the status alone.
pub struct BackServiceClient {
    client: Client,
    base_url: String,
}

impl BackServiceClient {
    /// Build a client against the back service's base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl WeatherGateway for BackServiceClient {
    #[tracing::instrument(
        name = "weather_service_request",
        skip_all,
        fields(
            weather_service.url = Empty,
            weather_service.status_code = Empty,
            weather_service.error = Empty,
        )
    )]
    async fn weather_by_cep(
        &self,
        ctx: TraceContext,
        cep: &Cep,
    ) -> Result<WeatherReport, ClimaError> {
        let span = Span::current();
        let url = format!("{}/weather/{}", self.base_url, cep);
        span.record("weather_service.url", url.as_str());

        let response = self
            .client
            .get(&url)
            .header(TRACEPARENT_HEADER, ctx.to_string())
            .send()
            .await
            .map_err(|err| {
                span.record("weather_service.error", err.to_string().as_str());
                ClimaError::internal(format!("failed to call weather service: {err}"))
            })?;

        let status = response.status();
        span.record("weather_service.status_code", status.as_u16());

        if !status.is_success() {
            let err = match response.json::<ErrorBody>().await {
                Ok(body) => match status {
                    StatusCode::UNPROCESSABLE_ENTITY => ClimaError::InvalidZipcode,
                    StatusCode::NOT_FOUND => ClimaError::ZipcodeNotFound,
                    _ => ClimaError::Internal(body.error),
                },
                Err(_) => {
                    ClimaError::internal(format!("weather service status {}", status.as_u16()))
                }
            };
            span.record("weather_service.error", err.to_string().as_str());
            return Err(err);
        }

        response.json::<WeatherReport>().await.map_err(|err| {
            span.record("weather_service.error", "failed to decode response");
            ClimaError::internal(format!("failed to decode weather service response: {err}"))
        })
    }
}
