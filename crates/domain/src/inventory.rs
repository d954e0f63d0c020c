//! Inventory: everything the gateway has discovered, as returned by the
//! `allDevices` endpoint.

use serde::{Deserialize, Serialize};

use crate::device::{Device, sort_by_type};
use crate::id::DeviceId;
use crate::sensor::Sensor;

/// Devices and sensors known to the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub devices: Vec<Device>,
    #[serde(default)]
    pub sensors: Vec<Sensor>,
}

impl Inventory {
    /// Devices in display order (by type).
    #[must_use]
    pub fn sorted_devices(&self) -> Vec<Device> {
        let mut devices = self.devices.clone();
        sort_by_type(&mut devices);
        devices
    }

    #[must_use]
    pub fn has_devices(&self) -> bool {
        !self.devices.is_empty()
    }

    #[must_use]
    pub fn has_sensors(&self) -> bool {
        !self.sensors.is_empty()
    }

    #[must_use]
    pub fn device(&self, id: DeviceId) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_all_devices_payload() {
        let json = r#"{
            "devices": [
                {"id":2,"type":"Thermostat","brand":"Buderus","name":"RC35","deviceid":16,"productid":86,"version":"01.09"},
                {"id":1,"type":"Boiler","brand":"Buderus","name":"GB172","deviceid":8,"productid":123,"version":"06.01"}
            ],
            "sensors": [
                {"no":1,"id":"28-233D-9497-0C03","temp":"21.5"}
            ]
        }"#;

        let inventory: Inventory = serde_json::from_str(json).unwrap();

        assert!(inventory.has_devices());
        assert!(inventory.has_sensors());
        let types: Vec<String> = inventory
            .sorted_devices()
            .into_iter()
            .map(|d| d.device_type)
            .collect();
        assert_eq!(types, vec!["Boiler", "Thermostat"]);
    }

    #[test]
    fn should_default_missing_lists_to_empty() {
        let inventory: Inventory = serde_json::from_str("{}").unwrap();
        assert!(!inventory.has_devices());
        assert!(!inventory.has_sensors());
    }

    #[test]
    fn should_find_device_by_id() {
        let device = Device::builder()
            .id(DeviceId::new(7))
            .device_type("Boiler")
            .name("GB172")
            .build()
            .unwrap();
        let inventory = Inventory {
            devices: vec![device],
            sensors: vec![],
        };
        assert!(inventory.device(DeviceId::new(7)).is_some());
        assert!(inventory.device(DeviceId::new(8)).is_none());
    }
}
