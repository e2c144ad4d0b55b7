//! Shared application state for axum handlers.

use std::sync::Arc;

use clima_app::ports::{LocalityResolver, TemperatureProbe, WeatherGateway};
use clima_app::services::cep_service::CepService;
use clima_app::services::weather_service::WeatherService;

/// State for the front (service-a) router.
///
/// Generic over the gateway port to avoid dynamic dispatch. `Clone` is
/// implemented manually so the gateway itself does not need to be `Clone` —
/// only the `Arc` wrapper is cloned.
pub struct FrontState<G> {
    /// Front orchestration service.
    pub cep_service: Arc<CepService<G>>,
}

impl<G> Clone for FrontState<G> {
    fn clone(&self) -> Self {
        Self {
            cep_service: Arc::clone(&self.cep_service),
        }
    }
}

impl<G: WeatherGateway> FrontState<G> {
    /// Wrap the front service for sharing across handlers.
    pub fn new(cep_service: CepService<G>) -> Self {
        Self {
            cep_service: Arc::new(cep_service),
        }
    }
}

/// State for the back (service-b) router, generic over the two upstream
/// ports.
pub struct BackState<L, T> {
    /// The zipcode → weather pipeline.
    pub weather_service: Arc<WeatherService<L, T>>,
}

impl<L, T> Clone for BackState<L, T> {
    fn clone(&self) -> Self {
        Self {
            weather_service: Arc::clone(&self.weather_service),
        }
    }
}

impl<L, T> BackState<L, T>
where
    L: LocalityResolver,
    T: TemperatureProbe,
{
    /// Wrap the pipeline service for sharing across handlers.
    pub fn new(weather_service: WeatherService<L, T>) -> Self {
        Self {
            weather_service: Arc::new(weather_service),
        }
    }
}
