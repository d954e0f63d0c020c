//! Devices screen: device list, register detail, sensor list, edit buffer and
//! scan dialog of a single dashboard view.

use emsdash_domain::device::Device;
use emsdash_domain::device_data::DeviceData;
use emsdash_domain::device_value::{DeviceValue, DeviceValueField};
use emsdash_domain::error::ApiError;
use emsdash_domain::id::DeviceId;
use emsdash_domain::inventory::Inventory;
use emsdash_domain::notification::Notification;
use emsdash_domain::sensor::Sensor;
use emsdash_domain::viewer::Viewer;

use super::scan_dialog::ScanDialog;

const DEVICE_DATA_FALLBACK: &str = "Problem getting device data";

/// Identifies one device-data request so late responses can be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

/// A device-data fetch the caller must issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceDataRequest {
    pub id: DeviceId,
    pub token: RequestToken,
}

/// One rendered row of the register table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    /// First-cell index, passed back to [`DevicesScreen::send_command`].
    pub index: usize,
    pub label: String,
    /// Value with its unit suffix.
    pub value: String,
    /// Whether the edit control is shown.
    pub editable: bool,
}

/// What the device detail section shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    /// Nothing selected yet, data still loading, or no device on the bus.
    Hidden,
    /// The device answered with no registers.
    NoData { name: String },
    Records { name: String, rows: Vec<RecordRow> },
}

/// Component-local state of the devices screen.
///
/// Device-data responses carry the [`RequestToken`] of their request; only the
/// response to the most recently issued request is applied.
#[derive(Debug, Clone, Default)]
pub struct DevicesScreen {
    inventory: Option<Inventory>,
    viewer: Viewer,
    scan: ScanDialog,
    selected: Option<DeviceId>,
    device_data: Option<DeviceData>,
    editing: Option<DeviceValue>,
    generation: u64,
}

impl DevicesScreen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_inventory(&mut self, inventory: Inventory) {
        self.inventory = Some(inventory);
    }

    pub fn set_viewer(&mut self, viewer: Viewer) {
        self.viewer = viewer;
    }

    #[must_use]
    pub fn inventory(&self) -> Option<&Inventory> {
        self.inventory.as_ref()
    }

    #[must_use]
    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    #[must_use]
    pub fn selected(&self) -> Option<DeviceId> {
        self.selected
    }

    #[must_use]
    pub fn device_data(&self) -> Option<&DeviceData> {
        self.device_data.as_ref()
    }

    #[must_use]
    pub fn editing(&self) -> Option<&DeviceValue> {
        self.editing.as_ref()
    }

    #[must_use]
    pub fn scan(&self) -> ScanDialog {
        self.scan
    }

    /// Devices in display order, empty until the inventory is loaded.
    #[must_use]
    pub fn devices(&self) -> Vec<Device> {
        self.inventory
            .as_ref()
            .map(Inventory::sorted_devices)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn sensors(&self) -> &[Sensor] {
        self.inventory
            .as_ref()
            .map(|i| i.sensors.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn has_devices(&self) -> bool {
        self.inventory.as_ref().is_some_and(Inventory::has_devices)
    }

    // -- device selection ---------------------------------------------------

    /// Select a device row and start loading its register data.
    ///
    /// Clears the previously displayed data and invalidates every request
    /// issued before this one.
    pub fn select_device(&mut self, id: DeviceId) -> DeviceDataRequest {
        self.generation += 1;
        self.selected = Some(id);
        self.device_data = None;
        DeviceDataRequest {
            id,
            token: RequestToken(self.generation),
        }
    }

    /// Whether `token` belongs to the most recently issued request.
    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        token == RequestToken(self.generation)
    }

    /// Apply the resolution of a device-data request.
    ///
    /// `data` is `None` when the request failed, which clears the detail
    /// section. Returns `false` (and changes nothing) when a newer request has
    /// been issued since.
    pub fn apply_device_data(&mut self, token: RequestToken, data: Option<DeviceData>) -> bool {
        if !self.is_current(token) {
            tracing::debug!(?token, "discarding stale device data");
            return false;
        }
        self.device_data = data;
        true
    }

    /// Apply the result of a device-data request and return the error
    /// notification to raise, if any.
    ///
    /// A failure only yields a notification when it belongs to the current
    /// request; late failures are dropped like late successes.
    pub fn resolve_device_data(
        &mut self,
        token: RequestToken,
        result: Result<DeviceData, ApiError>,
    ) -> Option<Notification> {
        match result {
            Ok(data) => {
                self.apply_device_data(token, Some(data));
                None
            }
            Err(err) => self
                .apply_device_data(token, None)
                .then(|| Notification::error(err.message_or(DEVICE_DATA_FALLBACK))),
        }
    }

    /// Render model of the detail section.
    #[must_use]
    pub fn detail(&self) -> DetailView {
        if !self.has_devices() || self.selected.is_none() {
            return DetailView::Hidden;
        }
        let Some(data) = &self.device_data else {
            return DetailView::Hidden;
        };
        if data.is_empty() {
            return DetailView::NoData {
                name: data.name.clone(),
            };
        }
        let can_write = self.viewer.can_write();
        let rows = data
            .records()
            .map(|record| RecordRow {
                index: record.index(),
                label: record.label().to_string(),
                value: record.formatted_value(),
                editable: record.is_writable() && can_write,
            })
            .collect();
        DetailView::Records {
            name: data.name.clone(),
            rows,
        }
    }

    // -- edit flow ----------------------------------------------------------

    /// Open the edit form for the record starting at cell `index`.
    ///
    /// Returns `false` when there is no selected device, no loaded data or
    /// `index` is not the start of a complete record.
    pub fn send_command(&mut self, index: usize) -> bool {
        let (Some(id), Some(data)) = (self.selected, &self.device_data) else {
            return false;
        };
        let Some(record) = data.record_at(index) else {
            return false;
        };
        self.editing = Some(DeviceValue::from_record(id, &record));
        true
    }

    /// Update one field of the value being edited.
    pub fn handle_value_change(&mut self, field: DeviceValueField, value: impl Into<String>) {
        if let Some(editing) = &mut self.editing {
            editing.set(field, value);
        }
    }

    /// Drop the value being edited without sending anything.
    pub fn cancel_editing_value(&mut self) {
        self.editing = None;
    }

    /// Close the edit form and hand out the value to write.
    ///
    /// The form is closed right away; the write result is reported through a
    /// notification once the request resolves.
    pub fn done_editing_value(&mut self) -> Option<DeviceValue> {
        self.editing.take()
    }

    // -- scan dialog --------------------------------------------------------

    pub fn request_scan(&mut self) {
        self.scan.request();
    }

    pub fn cancel_scan(&mut self) {
        self.scan.cancel();
    }

    /// Returns `true` when the scan request must be issued.
    pub fn confirm_scan(&mut self) -> bool {
        self.scan.confirm()
    }

    pub fn finish_scan(&mut self) {
        self.scan.finish();
    }
}
