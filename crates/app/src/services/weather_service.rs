//! Weather service — the back pipeline: validate → locality → temperature.

use tracing::Span;
use tracing::field::Empty;

use clima_domain::cep::Cep;
use clima_domain::error::ClimaError;
use clima_domain::locality::Locality;
use clima_domain::trace::TraceContext;
use clima_domain::weather::{WeatherReport, convert_celsius};

use crate::ports::{LocalityResolver, TemperatureProbe};

/// Application service running the full zipcode → weather pipeline.
///
/// Stages run strictly in order — the temperature lookup needs the locality
/// lookup's output — and each stage opens its own span nested under the
/// pipeline span.
pub struct WeatherService<L, T> {
    locality: L,
    temperature: T,
}

impl<L, T> WeatherService<L, T>
where
    L: LocalityResolver,
    T: TemperatureProbe,
{
    /// Create a new service over the two upstream ports.
    pub fn new(locality: L, temperature: T) -> Self {
        Self {
            locality,
            temperature,
        }
    }

    /// Resolve a raw zipcode string to a full weather report.
    ///
    /// # Errors
    ///
    /// Returns [`ClimaError::InvalidZipcode`] when validation fails,
    /// [`ClimaError::ZipcodeNotFound`] when the locality stage fails for any
    /// reason, and the temperature stage's own error unchanged.
    #[tracing::instrument(
        name = "get_weather_by_zipcode",
        skip_all,
        fields(zipcode = raw, trace_id = %ctx.trace_id_hex())
    )]
    pub async fn weather_by_zipcode(
        &self,
        ctx: TraceContext,
        raw: &str,
    ) -> Result<WeatherReport, ClimaError> {
        let cep = validate_zipcode(raw)?;
        let locality = self.resolve_locality(ctx, &cep).await?;
        let temp_c = self.resolve_temperature(ctx, &locality).await?;
        Ok(WeatherReport::from_celsius(locality, temp_c))
    }

    /// Locality stage. Every resolver failure — not-found, transient
    /// unavailability, internal fault — leaves this stage as
    /// [`ClimaError::ZipcodeNotFound`]; the resolver's own kind survives
    /// only as the `location.error` span attribute.
    #[tracing::instrument(
        name = "get_location_by_zipcode",
        skip_all,
        fields(location.city = Empty, location.error = Empty)
    )]
    async fn resolve_locality(&self, ctx: TraceContext, cep: &Cep) -> Result<Locality, ClimaError> {
        match self.locality.resolve_locality(ctx.child(), cep).await {
            Ok(locality) => {
                Span::current().record("location.city", locality.as_str());
                Ok(locality)
            }
            Err(err) => {
                Span::current().record("location.error", err.to_string().as_str());
                Err(ClimaError::ZipcodeNotFound)
            }
        }
    }

    /// Temperature stage. Failures propagate with their original kind.
    #[tracing::instrument(
        name = "get_temperature_by_location",
        skip_all,
        fields(
            temperature.celsius = Empty,
            temperature.fahrenheit = Empty,
            temperature.kelvin = Empty,
            temperature.error = Empty,
        )
    )]
    async fn resolve_temperature(
        &self,
        ctx: TraceContext,
        locality: &Locality,
    ) -> Result<f64, ClimaError> {
        match self.temperature.current_celsius(ctx.child(), locality).await {
            Ok(temp_c) => {
                let (temp_f, temp_k) = convert_celsius(temp_c);
                let span = Span::current();
                span.record("temperature.celsius", temp_c);
                span.record("temperature.fahrenheit", temp_f);
                span.record("temperature.kelvin", temp_k);
                Ok(temp_c)
            }
            Err(err) => {
                Span::current().record("temperature.error", err.to_string().as_str());
                Err(err)
            }
        }
    }
}

/// Validation stage, shared shape with the front service's `validate_cep`.
#[tracing::instrument(
    name = "validate_zipcode",
    skip_all,
    fields(zipcode.validation = Empty, zipcode.value = Empty)
)]
fn validate_zipcode(raw: &str) -> Result<Cep, ClimaError> {
    match Cep::parse(raw) {
        Ok(cep) => {
            let span = Span::current();
            span.record("zipcode.validation", "valid");
            span.record("zipcode.value", cep.as_str());
            Ok(cep)
        }
        Err(err) => {
            Span::current().record("zipcode.validation", "invalid");
            Err(err)
        }
    }
}
