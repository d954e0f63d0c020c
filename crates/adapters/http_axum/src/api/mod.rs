//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
pub mod status;
pub mod values;
pub mod viewer;

use axum::Router;
use axum::routing::{get, post};

use emsdash_app::ports::Bus;

use crate::state::AppState;

/// Build the `/rest` sub-router.
pub fn routes<B>() -> Router<AppState<B>>
where
    B: Bus + 'static,
{
    Router::new()
        .route("/allDevices", get(devices::list::<B>))
        .route("/scanDevices", get(devices::scan::<B>))
        .route("/deviceData", post(devices::data::<B>))
        .route("/writeValue", post(values::write::<B>))
        .route("/me", get(viewer::me::<B>))
        .route("/busStatus", get(status::bus_status::<B>))
}
