//! Cep — a validated Brazilian postal code.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ClimaError;

/// A normalized zipcode: exactly eight ASCII decimal digits.
///
/// Parsing strips every `-` and space character first, so `"01310-100"` and
/// `"01310100"` normalize to the same value. No structural subdivision is
/// modeled; once validated the code is an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cep(String);

impl Cep {
    /// Normalize and validate a raw zipcode string.
    ///
    /// # Errors
    ///
    /// Returns [`ClimaError::InvalidZipcode`] unless the input, after
    /// stripping hyphens and spaces, is exactly eight decimal digits.
    pub fn parse(raw: &str) -> Result<Self, ClimaError> {
        let normalized: String = raw.chars().filter(|c| *c != '-' && *c != ' ').collect();
        if normalized.len() == 8 && normalized.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(normalized))
        } else {
            Err(ClimaError::InvalidZipcode)
        }
    }

    /// The normalized digit string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Cep {
    type Err = ClimaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
