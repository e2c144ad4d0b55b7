//! The closed error taxonomy shared by every component.
//!
//! Raw faults (network errors, decode errors, unexpected statuses) are
//! wrapped into one of these kinds at the point of detection; nothing
//! crosses a component boundary as an untyped error. Adapters match on the
//! variant, never on the rendered message.

/// Terminal failure kinds for a weather lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClimaError {
    /// The zipcode failed format validation.
    #[error("invalid zipcode")]
    InvalidZipcode,

    /// The zipcode or its locality could not be resolved upstream.
    #[error("can not find zipcode")]
    ZipcodeNotFound,

    /// An upstream answered with a transient-unavailability status (502/503).
    #[error("{service} temporarily unavailable")]
    UpstreamUnavailable {
        /// Which upstream reported the outage.
        service: &'static str,
    },

    /// Everything else: network faults, decode failures, unexpected status
    /// codes, cross-service call failures.
    #[error("{0}")]
    Internal(String),
}

impl ClimaError {
    /// Wrap an arbitrary fault description as an [`ClimaError::Internal`].
    #[must_use]
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }
}
