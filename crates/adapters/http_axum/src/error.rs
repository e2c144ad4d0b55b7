//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use clima_domain::error::ClimaError;

/// JSON error body returned by both services.
#[derive(Serialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}

/// Maps request-level failures to an HTTP response with the shared status
/// convention: 400 for unparseable bodies, 422 invalid zipcode, 404 not
/// found, 500 for everything else with a generic message.
pub enum ApiError {
    /// The request body did not match the expected JSON shape.
    InvalidBody,
    /// A pipeline failure, mapped through the error taxonomy.
    Pipeline(ClimaError),
}

impl From<ClimaError> for ApiError {
    fn from(err: ClimaError) -> Self {
        Self::Pipeline(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::InvalidBody => (StatusCode::BAD_REQUEST, "invalid request format".to_string()),
            Self::Pipeline(err @ ClimaError::InvalidZipcode) => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            Self::Pipeline(err @ ClimaError::ZipcodeNotFound) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            Self::Pipeline(err) => {
                tracing::error!(error = %err, "weather lookup failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
