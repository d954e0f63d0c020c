//! # emsdash-adapter-virtual
//!
//! Simulated EMS bus for development and demos without a gateway attached.
//!
//! ## Simulated bus
//!
//! | Device | Id | Present | Writable registers |
//! |--------|----|---------|--------------------|
//! | Buderus GB125/BC10 boiler | 1 | at startup | `flowtemp`, `wwtemp`, `wwactivated` |
//! | Buderus RC35 thermostat | 2 | at startup | `temp`, `nighttemp`, `mode` |
//! | Buderus MM10 mixing module | 3 | after a scan | none |
//!
//! Two Dallas sensors are attached; the second has not reported a reading.
//!
//! ## Telegram accounting
//!
//! A device-data read counts one request sent and one reply received. An
//! accepted write counts one request sent; a write the device refuses also
//! counts as a transmission error. A scan broadcasts one read and receives one
//! reply per discovered device. Requests to unknown devices or read-only
//! registers never reach the bus and are not counted.
//!
//! ## Dependency rule
//!
//! Depends on `emsdash-app` (port traits) and `emsdash-domain` only.

mod devices;
mod register;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use emsdash_app::ports::Bus;
use emsdash_domain::bus_status::{BusStatus, TelegramCounters};
use emsdash_domain::device_data::DeviceData;
use emsdash_domain::device_value::DeviceValue;
use emsdash_domain::error::{BusError, ValidationError};
use emsdash_domain::id::DeviceId;
use emsdash_domain::inventory::Inventory;
use emsdash_domain::sensor::Sensor;
use tokio::sync::RwLock;

use devices::VirtualDevice;

/// Delay between a scan request and the discovery of pending devices.
pub const DEFAULT_SCAN_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug)]
struct BusState {
    devices: Vec<VirtualDevice>,
    /// Devices that answer only once a scan has run.
    pending: Vec<VirtualDevice>,
    sensors: Vec<Sensor>,
    counters: TelegramCounters,
}

impl BusState {
    fn seeded() -> Result<Self, ValidationError> {
        Ok(Self {
            devices: vec![
                devices::thermostat(DeviceId::new(2))?,
                devices::boiler(DeviceId::new(1))?,
            ],
            pending: vec![devices::mixer(DeviceId::new(3))?],
            sensors: vec![
                Sensor {
                    no: 1,
                    id: "28-233D-9497-0C03".to_string(),
                    temp: Some("21.4".to_string()),
                },
                Sensor {
                    no: 2,
                    id: "28-1A2B-3C4D-5E6F".to_string(),
                    temp: None,
                },
            ],
            counters: TelegramCounters::default(),
        })
    }

    fn device_mut(&mut self, id: DeviceId) -> Option<&mut VirtualDevice> {
        self.devices.iter_mut().find(|d| d.device.id == id)
    }

    fn discover_pending(&mut self) -> usize {
        let found = self.pending.len();
        for _ in 0..found {
            self.counters.record_received();
        }
        self.devices.append(&mut self.pending);
        found
    }
}

/// In-memory [`Bus`] with a fixed set of simulated devices.
///
/// Cheap to clone; clones share the same bus state.
#[derive(Debug, Clone)]
pub struct VirtualBus {
    state: Arc<RwLock<BusState>>,
    scan_delay: Duration,
}

impl VirtualBus {
    /// Create a bus whose scans complete after `scan_delay`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a simulated device is malformed.
    pub fn new(scan_delay: Duration) -> Result<Self, ValidationError> {
        Ok(Self {
            state: Arc::new(RwLock::new(BusState::seeded()?)),
            scan_delay,
        })
    }
}

impl Bus for VirtualBus {
    fn inventory(&self) -> impl Future<Output = Inventory> + Send {
        let state = Arc::clone(&self.state);
        async move {
            let state = state.read().await;
            Inventory {
                devices: state.devices.iter().map(|d| d.device.clone()).collect(),
                sensors: state.sensors.clone(),
            }
        }
    }

    fn start_scan(&self) -> impl Future<Output = ()> + Send {
        let state = Arc::clone(&self.state);
        let delay = self.scan_delay;
        async move {
            state.write().await.counters.record_read();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let found = state.write().await.discover_pending();
                tracing::info!(found, "device scan finished");
            });
        }
    }

    fn device_data(&self, id: DeviceId) -> impl Future<Output = Result<DeviceData, BusError>> + Send {
        let state = Arc::clone(&self.state);
        async move {
            let mut state = state.write().await;
            let data = state
                .devices
                .iter()
                .find(|d| d.device.id == id)
                .map(VirtualDevice::device_data)
                .ok_or(BusError::UnknownDevice(id))?;
            state.counters.record_read();
            state.counters.record_received();
            Ok(data)
        }
    }

    fn write_value(&self, value: DeviceValue) -> impl Future<Output = Result<(), BusError>> + Send {
        let state = Arc::clone(&self.state);
        async move {
            let mut state = state.write().await;
            let device = state
                .device_mut(value.id)
                .ok_or(BusError::UnknownDevice(value.id))?;
            let result = device.write(&value);
            match &result {
                Ok(()) => state.counters.record_write(),
                Err(BusError::InvalidValue { .. }) => {
                    state.counters.record_write();
                    state.counters.record_tx_error();
                }
                Err(_) => {}
            }
            result
        }
    }

    fn status(&self) -> impl Future<Output = BusStatus> + Send {
        let state = Arc::clone(&self.state);
        async move { state.read().await.counters.status(true) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emsdash_domain::bus_status::BusConnection;

    fn bus() -> VirtualBus {
        VirtualBus::new(Duration::from_millis(100)).unwrap()
    }

    fn write(id: u32, name: &str, cmd: &str, data: &str) -> DeviceValue {
        DeviceValue {
            id: DeviceId::new(id),
            data: data.to_string(),
            uom: String::new(),
            name: name.to_string(),
            cmd: cmd.to_string(),
        }
    }

    #[tokio::test]
    async fn should_list_seeded_devices_and_sensors() {
        let inventory = bus().inventory().await;
        assert_eq!(inventory.devices.len(), 2);
        assert_eq!(inventory.sensors.len(), 2);
        assert!(inventory.device(DeviceId::new(1)).is_some());
        assert!(inventory.device(DeviceId::new(3)).is_none());
    }

    #[tokio::test]
    async fn should_return_device_data_for_known_device() {
        let data = bus().device_data(DeviceId::new(1)).await.unwrap();
        assert_eq!(data.name, "Buderus GB125/BC10");
        assert!(!data.is_empty());
    }

    #[tokio::test]
    async fn should_reject_device_data_for_unknown_device() {
        let result = bus().device_data(DeviceId::new(42)).await;
        assert_eq!(result, Err(BusError::UnknownDevice(DeviceId::new(42))));
    }

    #[tokio::test]
    async fn should_persist_written_value() {
        let bus = bus();
        bus.write_value(write(2, "HC1 Mode", "mode", "night"))
            .await
            .unwrap();
        let data = bus.device_data(DeviceId::new(2)).await.unwrap();
        let mode = data.records().find(|r| r.label() == "HC1 Mode").unwrap();
        assert_eq!(mode.value(), "night");
    }

    #[tokio::test]
    async fn should_reject_write_to_unknown_device() {
        let result = bus().write_value(write(9, "Flow Temp", "flowtemp", "60")).await;
        assert_eq!(result, Err(BusError::UnknownDevice(DeviceId::new(9))));
    }

    #[tokio::test]
    async fn should_reject_invalid_write() {
        let result = bus().write_value(write(1, "Flow Temp", "flowtemp", "150")).await;
        assert!(matches!(result, Err(BusError::InvalidValue { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn should_discover_pending_devices_after_scan_delay() {
        let bus = bus();
        bus.start_scan().await;
        assert_eq!(bus.inventory().await.devices.len(), 2);

        tokio::time::sleep(Duration::from_millis(150)).await;

        let inventory = bus.inventory().await;
        assert_eq!(inventory.devices.len(), 3);
        assert!(inventory.device(DeviceId::new(3)).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_duplicate_devices_on_repeated_scan() {
        let bus = bus();
        bus.start_scan().await;
        bus.start_scan().await;
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(bus.inventory().await.devices.len(), 3);
    }

    #[tokio::test]
    async fn should_start_with_idle_connected_bus() {
        let status = bus().status().await;
        assert_eq!(status.status, BusConnection::Connected);
        assert_eq!(status.rx_received, 0);
        assert_eq!(status.tx_sent, 0);
    }

    #[tokio::test]
    async fn should_count_device_data_reads_and_writes() {
        let bus = bus();
        bus.device_data(DeviceId::new(1)).await.unwrap();
        bus.device_data(DeviceId::new(2)).await.unwrap();
        bus.write_value(write(1, "Flow Temp", "flowtemp", "70"))
            .await
            .unwrap();

        let status = bus.status().await;

        assert_eq!(status.rx_received, 2);
        assert_eq!(status.tx_sent, 3);
        assert_eq!(status.tx_quality, 100);
        assert_eq!(status.status, BusConnection::Connected);
    }

    #[tokio::test]
    async fn should_not_count_requests_that_never_reach_the_bus() {
        let bus = bus();
        let _ = bus.device_data(DeviceId::new(42)).await;
        let _ = bus.write_value(write(9, "Flow Temp", "flowtemp", "60")).await;
        let _ = bus.write_value(write(2, "Outside Temp", "", "10")).await;

        let status = bus.status().await;

        assert_eq!(status.tx_sent, 0);
        assert_eq!(status.rx_received, 0);
    }

    #[tokio::test]
    async fn should_flag_tx_issues_after_refused_write() {
        let bus = bus();
        bus.write_value(write(1, "Flow Temp", "flowtemp", "70"))
            .await
            .unwrap();
        let _ = bus.write_value(write(1, "Flow Temp", "flowtemp", "150")).await;

        let status = bus.status().await;

        assert_eq!(status.tx_sent, 2);
        assert_eq!(status.tx_quality, 50);
        assert_eq!(status.status, BusConnection::TxIssues);
    }

    #[tokio::test(start_paused = true)]
    async fn should_count_scan_broadcast_and_replies() {
        let bus = bus();
        bus.start_scan().await;
        assert_eq!(bus.status().await.tx_sent, 1);

        tokio::time::sleep(Duration::from_millis(150)).await;

        let status = bus.status().await;
        assert_eq!(status.tx_sent, 1);
        assert_eq!(status.rx_received, 1);
    }

    #[tokio::test]
    async fn should_share_state_between_clones() {
        let bus = bus();
        let other = bus.clone();
        other
            .write_value(write(1, "Flow Temp", "flowtemp", "70"))
            .await
            .unwrap();
        let data = bus.device_data(DeviceId::new(1)).await.unwrap();
        let flow = data.records().find(|r| r.label() == "Flow Temp").unwrap();
        assert_eq!(flow.value(), "70");
    }
}
