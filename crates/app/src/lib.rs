//! # clima-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound
//!   ports):
//!   - `LocalityResolver` — zipcode → locality via the geocoding provider
//!   - `TemperatureProbe` — locality → current Celsius via the weather
//!     provider
//!   - `WeatherGateway` — the front service's remote view of the back
//!     service's pipeline
//! - Provide the two use-case services:
//!   - `WeatherService` — the back pipeline: validate → locality →
//!     temperature → convert
//!   - `CepService` — the front orchestration: validate, then delegate
//!     remotely
//! - Open one traced unit of work per stage and attach the diagnostic
//!   attributes each stage produces
//!
//! ## Dependency rule
//! Depends on `clima-domain` only. Never imports adapter crates. Adapters
//! depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
