//! JSON REST handlers for devices and sensors.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use emsdash_app::ports::Bus;
use emsdash_domain::device_data::{DeviceData, DeviceDataQuery};
use emsdash_domain::inventory::Inventory;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Inventory>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the scan endpoint.
pub enum ScanResponse {
    Started,
}

impl IntoResponse for ScanResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Started => StatusCode::OK.into_response(),
        }
    }
}

/// Possible responses from the device data endpoint.
pub enum DataResponse {
    Ok(Json<DeviceData>),
}

impl IntoResponse for DataResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /rest/allDevices`
pub async fn list<B>(State(state): State<AppState<B>>) -> ListResponse
where
    B: Bus + 'static,
{
    let inventory = state.bus_service.inventory().await;
    ListResponse::Ok(Json(inventory))
}

/// `GET /rest/scanDevices`
pub async fn scan<B>(State(state): State<AppState<B>>) -> ScanResponse
where
    B: Bus + 'static,
{
    state.bus_service.start_scan().await;
    ScanResponse::Started
}

/// `POST /rest/deviceData`
pub async fn data<B>(
    State(state): State<AppState<B>>,
    Json(query): Json<DeviceDataQuery>,
) -> Result<DataResponse, ApiError>
where
    B: Bus + 'static,
{
    let data = state.bus_service.device_data(query.id).await?;
    Ok(DataResponse::Ok(Json(data)))
}
