//! Bus port: the gateway side that talks to devices on the EMS bus.
//!
//! Implemented by bus adapters (e.g. `adapter_virtual`) and served over HTTP
//! by the `http_axum` adapter.

use std::future::Future;

use emsdash_domain::bus_status::BusStatus;
use emsdash_domain::device_data::DeviceData;
use emsdash_domain::device_value::DeviceValue;
use emsdash_domain::error::BusError;
use emsdash_domain::id::DeviceId;
use emsdash_domain::inventory::Inventory;

/// Access to the devices and sensors behind the gateway.
pub trait Bus: Send + Sync {
    /// Snapshot of the discovered devices and attached sensors.
    fn inventory(&self) -> impl Future<Output = Inventory> + Send;

    /// Start a scan for new devices. Returns once the scan is scheduled,
    /// discovery itself happens in the background.
    fn start_scan(&self) -> impl Future<Output = ()> + Send;

    /// Current register values of a device.
    fn device_data(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<DeviceData, BusError>> + Send;

    /// Send a write command for one register.
    fn write_value(&self, value: DeviceValue) -> impl Future<Output = Result<(), BusError>> + Send;

    /// Telegram counters and link health.
    fn status(&self) -> impl Future<Output = BusStatus> + Send;
}
