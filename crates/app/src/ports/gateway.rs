//! Gateway port — the front service's remote view of the back pipeline.

use std::future::Future;

use clima_domain::cep::Cep;
use clima_domain::error::ClimaError;
use clima_domain::trace::TraceContext;
use clima_domain::weather::WeatherReport;

/// Invokes the weather pipeline over the service boundary.
///
/// Implementations translate the remote outcome back into the taxonomy by
/// status tag (422 → [`ClimaError::InvalidZipcode`], 404 →
/// [`ClimaError::ZipcodeNotFound`], anything else non-2xx →
/// [`ClimaError::Internal`]) and inject `ctx` into the outbound request as
/// its trace parent.
pub trait WeatherGateway {
    /// Resolve `cep` to a full weather report via the back service.
    fn weather_by_cep(
        &self,
        ctx: TraceContext,
        cep: &Cep,
    ) -> impl Future<Output = Result<WeatherReport, ClimaError>> + Send;
}

impl<T: WeatherGateway + Send + Sync> WeatherGateway for std::sync::Arc<T> {
    fn weather_by_cep(
        &self,
        ctx: TraceContext,
        cep: &Cep,
    ) -> impl Future<Output = Result<WeatherReport, ClimaError>> + Send {
        (**self).weather_by_cep(ctx, cep)
    }
}
