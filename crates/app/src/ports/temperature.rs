//! Temperature port — locality → current Celsius via the weather provider.

use std::future::Future;

use clima_domain::error::ClimaError;
use clima_domain::locality::Locality;
use clima_domain::trace::TraceContext;

/// Fetches the current temperature for a locality.
///
/// The weather provider does not distinguish "unknown location" from any
/// other failure, so implementations map every non-2xx status, network
/// fault, and decode fault to [`ClimaError::Internal`]. `ctx` is injected
/// verbatim into the outbound request as its trace parent.
pub trait TemperatureProbe {
    /// Current temperature at `locality`, in Celsius.
    fn current_celsius(
        &self,
        ctx: TraceContext,
        locality: &Locality,
    ) -> impl Future<Output = Result<f64, ClimaError>> + Send;
}

impl<T: TemperatureProbe + Send + Sync> TemperatureProbe for std::sync::Arc<T> {
    fn current_celsius(
        &self,
        ctx: TraceContext,
        locality: &Locality,
    ) -> impl Future<Output = Result<f64, ClimaError>> + Send {
        (**self).current_celsius(ctx, locality)
    }
}
