//! Device: a physical unit discovered on the EMS heating bus.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::DeviceId;

/// Snapshot of a device as reported by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    /// Device category (`Boiler`, `Thermostat`, `Mixing Module`, …).
    #[serde(rename = "type")]
    pub device_type: String,
    pub brand: String,
    pub name: String,
    /// EMS bus address.
    pub deviceid: u8,
    pub productid: u8,
    pub version: String,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when `type` or `name` is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.device_type.is_empty() {
            return Err(ValidationError::EmptyType);
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }

    /// Brand and model name, as shown next to the type button.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.name)
    }

    /// Bus address, product id and firmware version, e.g.
    /// `DeviceID:0x08 ProductID:123 Version:06.01`.
    #[must_use]
    pub fn details(&self) -> String {
        format!(
            "DeviceID:0x{:02X} ProductID:{} Version:{}",
            self.deviceid, self.productid, self.version
        )
    }
}

/// Sort devices by type, keeping the backend order for equal types.
pub fn sort_by_type(devices: &mut [Device]) {
    devices.sort_by(|a, b| a.device_type.cmp(&b.device_type));
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    device_type: Option<String>,
    brand: Option<String>,
    name: Option<String>,
    deviceid: u8,
    productid: u8,
    version: Option<String>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<DeviceId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn device_type(mut self, device_type: impl Into<String>) -> Self {
        self.device_type = Some(device_type.into());
        self
    }

    #[must_use]
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn deviceid(mut self, deviceid: u8) -> Self {
        self.deviceid = deviceid;
        self
    }

    #[must_use]
    pub fn productid(mut self, productid: u8) -> Self {
        self.productid = productid;
        self
    }

    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if `type` or `name` is missing or empty.
    pub fn build(self) -> Result<Device, ValidationError> {
        let device = Device {
            id: self.id.unwrap_or(DeviceId::new(0)),
            device_type: self.device_type.unwrap_or_default(),
            brand: self.brand.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            deviceid: self.deviceid,
            productid: self.productid,
            version: self.version.unwrap_or_default(),
        };
        device.validate()?;
        Ok(device)
    }
}
