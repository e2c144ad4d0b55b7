//! Application services — the use-case entry points for both binaries.

pub mod cep_service;
pub mod weather_service;
