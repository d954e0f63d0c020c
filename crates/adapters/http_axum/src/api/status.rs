//! JSON REST handler for the bus status.

use axum::Json;
use axum::extract::State;

use emsdash_app::ports::Bus;
use emsdash_domain::bus_status::BusStatus;

use crate::state::AppState;

/// `GET /rest/busStatus`
pub async fn bus_status<B>(State(state): State<AppState<B>>) -> Json<BusStatus>
where
    B: Bus + 'static,
{
    Json(state.bus_service.status().await)
}
