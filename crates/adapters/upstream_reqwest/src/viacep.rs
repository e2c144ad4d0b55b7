//! ViaCEP client — zipcode → locality.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::Span;
use tracing::field::Empty;

use clima_app::ports::LocalityResolver;
use clima_domain::cep::Cep;
use clima_domain::error::ClimaError;
use clima_domain::locality::Locality;
use clima_domain::trace::{TRACEPARENT_HEADER, TraceContext};

/// Reqwest-backed geocoding adapter for the ViaCEP API.
///
/// Owns transport details only: request building, status mapping, and JSON
/// decoding into the domain's locality type.
pub struct ViaCepClient {
    client: Client,
    base_url: String,
}

impl ViaCepClient {
    /// Build a client against a base URL such as `https://viacep.com.br`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

/// Payload returned by ViaCEP. Both fields default to empty: the provider
/// signals "not found" with a body carrying no echo (`{"erro": true}`).
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    cep: String,
    #[serde(default)]
    localidade: String,
}

impl LocalityResolver for ViaCepClient {
    #[tracing::instrument(
        name = "viacep_request",
        skip_all,
        fields(
            viacep.url = Empty,
            viacep.status_code = Empty,
            viacep.city = Empty,
            viacep.error = Empty,
        )
    )]
    async fn resolve_locality(&self, ctx: TraceContext, cep: &Cep) -> Result<Locality, ClimaError> {
        let span = Span::current();
        let url = format!("{}/ws/{}/json/", self.base_url, cep);
        span.record("viacep.url", url.as_str());

        let response = self
            .client
            .get(&url)
            .header(TRACEPARENT_HEADER, ctx.to_string())
            .send()
            .await
            .map_err(|err| {
                span.record("viacep.error", err.to_string().as_str());
                ClimaError::internal(format!("viacep request failed: {err}"))
            })?;

        let status = response.status();
        span.record("viacep.status_code", status.as_u16());

        if !status.is_success() {
            if status == StatusCode::BAD_GATEWAY || status == StatusCode::SERVICE_UNAVAILABLE {
                span.record("viacep.error", "service temporarily unavailable");
                return Err(ClimaError::UpstreamUnavailable { service: "viacep" });
            }
            span.record("viacep.error", "zipcode not found");
            return Err(ClimaError::ZipcodeNotFound);
        }

        let payload: ViaCepResponse = response.json().await.map_err(|err| {
            span.record("viacep.error", "failed to decode response");
            ClimaError::internal(format!("failed to decode viacep response: {err}"))
        })?;

        // An empty echo means the provider did not match the zipcode.
        if payload.cep.is_empty() {
            span.record("viacep.error", "zipcode not found");
            return Err(ClimaError::ZipcodeNotFound);
        }
        let Some(locality) = Locality::new(payload.localidade) else {
            span.record("viacep.error", "localidade not found");
            return Err(ClimaError::ZipcodeNotFound);
        };

        span.record("viacep.city", locality.as_str());
        Ok(locality)
    }
}
