//! # clima-adapter-upstream-reqwest
//!
//! Outbound HTTP adapter built on [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the app's outbound ports against real HTTP upstreams:
//!   - [`viacep::ViaCepClient`] — geocoding (zipcode → locality)
//!   - [`weatherapi::WeatherApiClient`] — current temperature by locality
//!   - [`back_service::BackServiceClient`] — the front service's remote view
//!     of the back service
//! - Wrap every transport fault into the error taxonomy at the point of
//!   detection
//! - Inject the caller's trace context into each outbound request as a
//!   `traceparent` header
//!
//! Clients are built without a request timeout and perform no retries; a
//! hung upstream hangs the request until the caller disconnects, which
//! cancels the in-flight call by dropping it.

pub mod back_service;
pub mod viacep;
pub mod weatherapi;

pub use back_service::BackServiceClient;
pub use viacep::ViaCepClient;
pub use weatherapi::WeatherApiClient;
