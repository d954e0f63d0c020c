//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use emsdash_domain::error::BusError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`BusError`] to an HTTP response with the status the dashboard expects.
#[derive(Debug)]
pub struct ApiError(BusError);

impl From<BusError> for ApiError {
    fn from(err: BusError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            BusError::UnknownDevice(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: self.0.to_string(),
                }),
            )
                .into_response(),
            // 204 cannot carry a body
            BusError::NotWritable { .. } | BusError::InvalidValue { .. } => {
                tracing::debug!(error = %self.0, "request rejected by the bus");
                StatusCode::NO_CONTENT.into_response()
            }
        }
    }
}
