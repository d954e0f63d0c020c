//! HTTP gateway client wrapping `gloo-net` for calls to `/rest/*`.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use emsdash_app::ports::Gateway;
use emsdash_domain::device_data::{DeviceData, DeviceDataQuery};
use emsdash_domain::device_value::{DeviceValue, WriteOutcome, WriteValueRequest};
use emsdash_domain::error::ApiError;
use emsdash_domain::id::DeviceId;
use emsdash_domain::inventory::Inventory;
use emsdash_domain::viewer::Viewer;

/// Root of the gateway REST API.
pub const ENDPOINT_ROOT: &str = "/rest/";

fn url(endpoint: &str) -> String {
    format!("{ENDPOINT_ROOT}{endpoint}")
}

/// Map a `gloo-net` failure onto the gateway error type.
fn transport(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::SerdeError(err) => ApiError::Decode(err.to_string()),
        other => ApiError::Network(other.to_string()),
    }
}

/// Decode the JSON body of a `200` response.
async fn json_ok<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    ApiError::expect_ok(resp.status())?;
    resp.json().await.map_err(transport)
}

/// [`Gateway`] talking to the gateway REST API of the page's origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooGateway;

impl Gateway for GlooGateway {
    async fn fetch_inventory(&self) -> Result<Inventory, ApiError> {
        let resp = Request::get(&url("allDevices"))
            .send()
            .await
            .map_err(transport)?;
        json_ok(resp).await
    }

    async fn fetch_viewer(&self) -> Result<Viewer, ApiError> {
        let resp = Request::get(&url("me")).send().await.map_err(transport)?;
        json_ok(resp).await
    }

    async fn scan_devices(&self) -> Result<(), ApiError> {
        let resp = Request::get(&url("scanDevices"))
            .send()
            .await
            .map_err(transport)?;
        ApiError::scan_status(resp.status())
    }

    async fn fetch_device_data(&self, id: DeviceId) -> Result<DeviceData, ApiError> {
        let resp = Request::post(&url("deviceData"))
            .json(&DeviceDataQuery { id })
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        json_ok(resp).await
    }

    async fn write_value(&self, value: &DeviceValue) -> Result<WriteOutcome, ApiError> {
        let body = WriteValueRequest {
            devicevalue: value.clone(),
        };
        let resp = Request::post(&url("writeValue"))
            .json(&body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        WriteOutcome::from_status(resp.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_endpoint_urls_under_rest_root() {
        assert_eq!(url("allDevices"), "/rest/allDevices");
        assert_eq!(url("writeValue"), "/rest/writeValue");
    }
}
