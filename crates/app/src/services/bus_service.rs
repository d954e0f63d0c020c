//! Bus service: use-cases the gateway serves to the dashboard.

use emsdash_domain::bus_status::BusStatus;
use emsdash_domain::device_data::DeviceData;
use emsdash_domain::device_value::{DeviceValue, WriteOutcome};
use emsdash_domain::error::BusError;
use emsdash_domain::id::DeviceId;
use emsdash_domain::inventory::Inventory;
use emsdash_domain::viewer::Viewer;

use crate::ports::Bus;

/// Application service wrapping a [`Bus`] with access control and logging.
pub struct BusService<B> {
    bus: B,
}

impl<B: Bus> BusService<B> {
    /// Create a new service backed by the given bus.
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// The underlying bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Devices and sensors currently known.
    pub async fn inventory(&self) -> Inventory {
        self.bus.inventory().await
    }

    /// Schedule a scan for new devices.
    #[tracing::instrument(skip(self))]
    pub async fn start_scan(&self) {
        tracing::info!("starting device scan");
        self.bus.start_scan().await;
    }

    /// Register data of a single device.
    ///
    /// # Errors
    ///
    /// Returns [`BusError::UnknownDevice`] when no device has `id`.
    #[tracing::instrument(skip(self))]
    pub async fn device_data(&self, id: DeviceId) -> Result<DeviceData, BusError> {
        self.bus.device_data(id).await
    }

    /// Traffic counters and link health of the bus.
    pub async fn status(&self) -> BusStatus {
        self.bus.status().await
    }

    /// Send a write command on behalf of `viewer`.
    ///
    /// Non-admin viewers are denied without touching the bus. Bus errors are
    /// logged and reported as [`WriteOutcome::Failed`].
    #[tracing::instrument(skip(self, viewer, value), fields(user = %viewer.username, device = %value.id, register = %value.name))]
    pub async fn write_value(&self, viewer: &Viewer, value: DeviceValue) -> WriteOutcome {
        if !viewer.can_write() {
            tracing::warn!("write refused, viewer is not an administrator");
            return WriteOutcome::Denied;
        }
        match self.bus.write_value(value).await {
            Ok(()) => WriteOutcome::Sent,
            Err(err) => {
                tracing::warn!(error = %err, "write command rejected");
                WriteOutcome::Failed
            }
        }
    }
}
