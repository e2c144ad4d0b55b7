//! # clima-domain
//!
//! Pure domain model for the clima weather-by-zipcode system.
//!
//! ## Responsibilities
//! - Value objects: validated zipcodes ([`cep::Cep`]), non-empty place names
//!   ([`locality::Locality`]), and the response payload
//!   ([`weather::WeatherReport`])
//! - The closed error taxonomy every component terminates with
//!   ([`error::ClimaError`])
//! - The distributed trace context propagated between services
//!   ([`trace::TraceContext`])
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod cep;
pub mod error;
pub mod locality;
pub mod trace;
pub mod weather;
