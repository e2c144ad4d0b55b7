//! Cep service — the front orchestration: validate, then delegate remotely.

use tracing::Span;
use tracing::field::Empty;

use clima_domain::cep::Cep;
use clima_domain::error::ClimaError;
use clima_domain::trace::TraceContext;
use clima_domain::weather::WeatherReport;

use crate::ports::WeatherGateway;

/// Application service for the front (client-facing) side.
///
/// Validates the zipcode locally so malformed input never leaves the
/// process, then invokes the back service's pipeline through the gateway
/// port. Gateway errors propagate unchanged.
pub struct CepService<G> {
    gateway: G,
}

impl<G: WeatherGateway> CepService<G> {
    /// Create a new service over the back-service gateway port.
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Resolve a raw zipcode string to a weather report via the back service.
    ///
    /// # Errors
    ///
    /// Returns [`ClimaError::InvalidZipcode`] when validation fails, and
    /// whatever taxonomy kind the gateway reports otherwise.
    pub async fn weather_by_cep(
        &self,
        ctx: TraceContext,
        raw: &str,
    ) -> Result<WeatherReport, ClimaError> {
        let cep = validate_cep(raw)?;
        self.call_weather_service(ctx, &cep).await
    }

    #[tracing::instrument(
        name = "call_weather_service",
        skip_all,
        fields(
            weather_service.city = Empty,
            weather_service.temp_c = Empty,
            weather_service.error = Empty,
        )
    )]
    async fn call_weather_service(
        &self,
        ctx: TraceContext,
        cep: &Cep,
    ) -> Result<WeatherReport, ClimaError> {
        match self.gateway.weather_by_cep(ctx.child(), cep).await {
            Ok(report) => {
                let span = Span::current();
                span.record("weather_service.city", report.city.as_str());
                span.record("weather_service.temp_c", report.temp_c);
                Ok(report)
            }
            Err(err) => {
                Span::current().record("weather_service.error", err.to_string().as_str());
                Err(err)
            }
        }
    }
}

/// Validation stage, shared shape with the back service's `validate_zipcode`.
#[tracing::instrument(
    name = "validate_cep",
    skip_all,
    fields(cep.validation = Empty, cep.value = Empty)
)]
fn validate_cep(raw: &str) -> Result<Cep, ClimaError> {
    match Cep::parse(raw) {
        Ok(cep) => {
            let span = Span::current();
            span.record("cep.validation", "valid");
            span.record("cep.value", cep.as_str());
            Ok(cep)
        }
        Err(err) => {
            Span::current().record("cep.validation", "invalid");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use clima_domain::locality::Locality;

    struct StubGateway {
        response: Result<WeatherReport, ClimaError>,
        calls: Mutex<u32>,
    }

    impl StubGateway {
        fn new(response: Result<WeatherReport, ClimaError>) -> Arc<Self> {
            Arc::new(Self {
                response,
                calls: Mutex::new(0),
            })
        }

        fn calls(&self) -> u32 {
            *self.calls.lock().unwrap()
        }
    }

    impl WeatherGateway for StubGateway {
        async fn weather_by_cep(
            &self,
            _ctx: TraceContext,
            _cep: &Cep,
        ) -> Result<WeatherReport, ClimaError> {
            *self.calls.lock().unwrap() += 1;
            self.response.clone()
        }
    }

    fn report() -> WeatherReport {
        WeatherReport::from_celsius(Locality::new("São Paulo").unwrap(), 25.0)
    }

    #[tokio::test]
    async fn should_forward_valid_zipcode_to_gateway() {
        let gateway = StubGateway::new(Ok(report()));
        let service = CepService::new(Arc::clone(&gateway));

        let result = service
            .weather_by_cep(TraceContext::new_root(), "01310-100")
            .await
            .unwrap();

        assert_eq!(result, report());
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn should_reject_invalid_zipcode_without_calling_gateway() {
        let gateway = StubGateway::new(Ok(report()));
        let service = CepService::new(Arc::clone(&gateway));

        let err = service
            .weather_by_cep(TraceContext::new_root(), "123")
            .await
            .unwrap_err();

        assert_eq!(err, ClimaError::InvalidZipcode);
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn should_propagate_gateway_not_found_unchanged() {
        let gateway = StubGateway::new(Err(ClimaError::ZipcodeNotFound));
        let service = CepService::new(Arc::clone(&gateway));

        let err = service
            .weather_by_cep(TraceContext::new_root(), "01310100")
            .await
            .unwrap_err();

        assert_eq!(err, ClimaError::ZipcodeNotFound);
    }

    #[tokio::test]
    async fn should_propagate_gateway_internal_error_unchanged() {
        let gateway = StubGateway::new(Err(ClimaError::internal("weather service status 500")));
        let service = CepService::new(Arc::clone(&gateway));

        let err = service
            .weather_by_cep(TraceContext::new_root(), "01310100")
            .await
            .unwrap_err();

        assert_eq!(err, ClimaError::internal("weather service status 500"));
    }
}
