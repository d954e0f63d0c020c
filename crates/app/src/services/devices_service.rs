//! Devices service: the gateway calls behind the devices screen.
//!
//! Every failure is reported through the [`Notifier`] port; callers only get
//! back what they need to update the [`DevicesScreen`]. Device-data failures
//! are reported when the response is settled against the screen, so a
//! superseded request stays silent.

use emsdash_domain::device_data::DeviceData;
use emsdash_domain::device_value::{DeviceValue, WriteOutcome};
use emsdash_domain::error::ApiError;
use emsdash_domain::inventory::Inventory;
use emsdash_domain::notification::Notification;
use emsdash_domain::viewer::Viewer;

use crate::ports::{Gateway, Notifier};
use crate::screen::{DeviceDataRequest, DevicesScreen, RequestToken};

const INVENTORY_FALLBACK: &str = "Problem loading devices";
const SCAN_FALLBACK: &str = "Problem with scan";
const WRITE_FALLBACK: &str = "Problem writing value";

/// Resolution of a [`DeviceDataRequest`], to be settled with
/// [`DevicesService::settle_device_data`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDataResponse {
    pub token: RequestToken,
    pub data: Result<DeviceData, ApiError>,
}

/// Application service issuing the devices screen's gateway calls.
#[derive(Debug, Clone)]
pub struct DevicesService<G, N> {
    gateway: G,
    notifier: N,
}

impl<G: Gateway, N: Notifier> DevicesService<G, N> {
    /// Create a new service backed by the given gateway and notifier.
    pub fn new(gateway: G, notifier: N) -> Self {
        Self { gateway, notifier }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Load the devices and sensors discovered by the gateway.
    ///
    /// Returns `None` (after notifying) when the call fails.
    #[tracing::instrument(skip(self))]
    pub async fn load_inventory(&self) -> Option<Inventory> {
        match self.gateway.fetch_inventory().await {
            Ok(inventory) => Some(inventory),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load inventory");
                self.notifier
                    .notify(Notification::error(err.message_or(INVENTORY_FALLBACK)));
                None
            }
        }
    }

    /// Load the signed-in user, falling back to an anonymous non-admin viewer.
    #[tracing::instrument(skip(self))]
    pub async fn load_viewer(&self) -> Viewer {
        self.gateway.fetch_viewer().await.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load viewer, assuming read-only access");
            Viewer::default()
        })
    }

    /// Fetch the register data a device selection asked for.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_device_data(&self, request: DeviceDataRequest) -> DeviceDataResponse {
        let data = self.gateway.fetch_device_data(request.id).await;
        if let Err(err) = &data {
            tracing::warn!(error = %err, device = %request.id, "failed to fetch device data");
        }
        DeviceDataResponse {
            token: request.token,
            data,
        }
    }

    /// Apply a device-data response to the screen.
    ///
    /// Notifies only when a failure belongs to the current selection. Returns
    /// whether the response was applied.
    pub fn settle_device_data(
        &self,
        screen: &mut DevicesScreen,
        response: DeviceDataResponse,
    ) -> bool {
        let token = response.token;
        if let Some(notification) = screen.resolve_device_data(token, response.data) {
            self.notifier.notify(notification);
        }
        screen.is_current(token)
    }

    /// Ask the gateway to scan the bus for new devices.
    ///
    /// Returns whether the scan was accepted. The dialog must be closed
    /// either way.
    #[tracing::instrument(skip(self))]
    pub async fn scan_devices(&self) -> bool {
        match self.gateway.scan_devices().await {
            Ok(()) => {
                self.notifier
                    .notify(Notification::info("Device scan is starting..."));
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "scan request failed");
                self.notifier
                    .notify(Notification::error(err.message_or(SCAN_FALLBACK)));
                false
            }
        }
    }

    /// Send a write command and report its outcome.
    #[tracing::instrument(skip(self, value), fields(device = %value.id, register = %value.name))]
    pub async fn write_value(&self, value: DeviceValue) -> Option<WriteOutcome> {
        match self.gateway.write_value(&value).await {
            Ok(outcome) => {
                tracing::debug!(?outcome, "write command answered");
                self.notifier.notify(outcome.notification());
                Some(outcome)
            }
            Err(err) => {
                tracing::warn!(error = %err, "write command failed");
                self.notifier
                    .notify(Notification::error(err.message_or(WRITE_FALLBACK)));
                None
            }
        }
    }
}
