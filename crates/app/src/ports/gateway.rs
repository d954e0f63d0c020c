//! Gateway port: the REST calls the dashboard issues.
//!
//! The returned futures are not required to be `Send`: the browser adapter
//! runs them on a single-threaded executor.

use std::future::Future;

use emsdash_domain::device_data::DeviceData;
use emsdash_domain::device_value::{DeviceValue, WriteOutcome};
use emsdash_domain::error::ApiError;
use emsdash_domain::id::DeviceId;
use emsdash_domain::inventory::Inventory;
use emsdash_domain::viewer::Viewer;

/// Client side of the gateway REST API.
pub trait Gateway {
    /// `GET allDevices`: devices and sensors discovered so far.
    fn fetch_inventory(&self) -> impl Future<Output = Result<Inventory, ApiError>>;

    /// `GET me`: the signed-in user.
    fn fetch_viewer(&self) -> impl Future<Output = Result<Viewer, ApiError>>;

    /// `GET scanDevices`: start an asynchronous bus scan.
    ///
    /// Only `200` is a success; any other status is
    /// [`ApiError::InvalidStatus`].
    fn scan_devices(&self) -> impl Future<Output = Result<(), ApiError>>;

    /// `POST deviceData` with body `{"id": id}`.
    ///
    /// Only `200` is a success; any other status is
    /// [`ApiError::UnexpectedStatus`].
    fn fetch_device_data(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<DeviceData, ApiError>>;

    /// `POST writeValue` with body `{"devicevalue": value}`.
    fn write_value(
        &self,
        value: &DeviceValue,
    ) -> impl Future<Output = Result<WriteOutcome, ApiError>>;
}
