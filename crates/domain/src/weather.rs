//! Weather report — the response payload, in three temperature scales.

use serde::{Deserialize, Serialize};

use crate::locality::Locality;

/// Current weather for a resolved locality.
///
/// Built once per successful lookup and returned unchanged through every
/// service boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// The resolved city name.
    pub city: String,
    /// Temperature in Celsius as reported by the weather provider.
    #[serde(rename = "temp_C")]
    pub temp_c: f64,
    /// Temperature in Fahrenheit.
    #[serde(rename = "temp_F")]
    pub temp_f: f64,
    /// Temperature in Kelvin.
    #[serde(rename = "temp_K")]
    pub temp_k: f64,
}

impl WeatherReport {
    /// Build a report from a locality and its current Celsius temperature.
    #[must_use]
    pub fn from_celsius(locality: Locality, temp_c: f64) -> Self {
        let (temp_f, temp_k) = convert_celsius(temp_c);
        Self {
            city: locality.into_string(),
            temp_c,
            temp_f,
            temp_k,
        }
    }
}

/// Celsius → (Fahrenheit, Kelvin).
///
/// The Kelvin offset is 273, not 273.15 — the published wire contract fixes
/// the rounded constant.
#[must_use]
pub fn convert_celsius(temp_c: f64) -> (f64, f64) {
    (temp_c * 1.8 + 32.0, temp_c + 273.0)
}
