//! WeatherAPI client — locality → current temperature.

use reqwest::Client;
use serde::Deserialize;
use tracing::Span;
use tracing::field::Empty;

use clima_app::ports::TemperatureProbe;
use clima_domain::error::ClimaError;
use clima_domain::locality::Locality;
use clima_domain::trace::{TRACEPARENT_HEADER, TraceContext};

/// Reqwest-backed adapter for the WeatherAPI `current.json` endpoint.
///
/// The locality is passed as a query parameter, so names with spaces or
/// diacritics are URL-encoded by the client. The provider does not
/// distinguish "unknown location" from other failures; every non-2xx status
/// maps to [`ClimaError::Internal`].
pub struct WeatherApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherApiClient {
    /// Build a client against a base URL such as `http://api.weatherapi.com`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WeatherApiResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temp_c: f64,
}

impl TemperatureProbe for WeatherApiClient {
    #[tracing::instrument(
        name = "weatherapi_request",
        skip_all,
        fields(
            weatherapi.url = Empty,
            weatherapi.location = %locality,
            weatherapi.status_code = Empty,
            weatherapi.temp_c = Empty,
            weatherapi.error = Empty,
        )
    )]
    async fn current_celsius(
        &self,
        ctx: TraceContext,
        locality: &Locality,
    ) -> Result<f64, ClimaError> {
        let span = Span::current();
        let url = format!("{}/v1/current.json", self.base_url);
        span.record("weatherapi.url", url.as_str());

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", locality.as_str()),
                ("aqi", "no"),
            ])
            .header(TRACEPARENT_HEADER, ctx.to_string())
            .send()
            .await
            .map_err(|err| {
                span.record("weatherapi.error", err.to_string().as_str());
                ClimaError::internal(format!("weatherapi request failed: {err}"))
            })?;

        let status = response.status();
        span.record("weatherapi.status_code", status.as_u16());

        if !status.is_success() {
            let detail = format!("weather api status {}", status.as_u16());
            span.record("weatherapi.error", detail.as_str());
            return Err(ClimaError::Internal(detail));
        }

        let payload: WeatherApiResponse = response.json().await.map_err(|err| {
            span.record("weatherapi.error", "failed to decode response");
            ClimaError::internal(format!("failed to decode weatherapi response: {err}"))
        })?;

        span.record("weatherapi.temp_c", payload.current.temp_c);
        Ok(payload.current.temp_c)
    }
}
