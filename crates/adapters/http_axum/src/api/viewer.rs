//! JSON REST handler for the current account.

use axum::Json;
use axum::extract::State;

use emsdash_app::ports::Bus;
use emsdash_domain::viewer::Viewer;

use crate::state::AppState;

/// `GET /rest/me`
pub async fn me<B>(State(state): State<AppState<B>>) -> Json<Viewer>
where
    B: Bus + 'static,
{
    Json(Viewer::clone(&state.viewer))
}
