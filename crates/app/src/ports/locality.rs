//! Locality port — zipcode → place name via the geocoding provider.

use std::future::Future;

use clima_domain::cep::Cep;
use clima_domain::error::ClimaError;
use clima_domain::locality::Locality;
use clima_domain::trace::TraceContext;

/// Resolves a validated zipcode to the locality it belongs to.
///
/// Implementations wrap every raw fault into the taxonomy before returning:
/// transient upstream outages (502/503) as
/// [`ClimaError::UpstreamUnavailable`], other non-2xx statuses and empty
/// provider echoes as [`ClimaError::ZipcodeNotFound`], network and decode
/// faults as [`ClimaError::Internal`]. `ctx` is injected verbatim into the
/// outbound request as its trace parent.
pub trait LocalityResolver {
    /// Look up the locality for `cep`.
    fn resolve_locality(
        &self,
        ctx: TraceContext,
        cep: &Cep,
    ) -> impl Future<Output = Result<Locality, ClimaError>> + Send;
}

impl<T: LocalityResolver + Send + Sync> LocalityResolver for std::sync::Arc<T> {
    fn resolve_locality(
        &self,
        ctx: TraceContext,
        cep: &Cep,
    ) -> impl Future<Output = Result<Locality, ClimaError>> + Send {
        (**self).resolve_locality(ctx, cep)
    }
}
