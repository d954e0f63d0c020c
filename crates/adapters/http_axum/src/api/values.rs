//! JSON REST handler for register writes.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use emsdash_app::ports::Bus;
use emsdash_domain::device_value::{WriteOutcome, WriteValueRequest};

use crate::state::AppState;

/// Possible responses from the write endpoint.
pub enum WriteResponse {
    Sent,
    Failed,
    Denied,
}

impl From<WriteOutcome> for WriteResponse {
    fn from(outcome: WriteOutcome) -> Self {
        match outcome {
            WriteOutcome::Sent => Self::Sent,
            WriteOutcome::Failed => Self::Failed,
            WriteOutcome::Denied => Self::Denied,
        }
    }
}

impl IntoResponse for WriteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Sent => StatusCode::OK.into_response(),
            Self::Failed => StatusCode::NO_CONTENT.into_response(),
            Self::Denied => StatusCode::FORBIDDEN.into_response(),
        }
    }
}

/// `POST /rest/writeValue`
pub async fn write<B>(
    State(state): State<AppState<B>>,
    Json(req): Json<WriteValueRequest>,
) -> WriteResponse
where
    B: Bus + 'static,
{
    state
        .bus_service
        .write_value(&state.viewer, req.devicevalue)
        .await
        .into()
}
