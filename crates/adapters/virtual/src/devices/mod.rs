//! Simulated EMS devices.

mod boiler;
mod mixer;
mod thermostat;

pub use boiler::boiler;
pub use mixer::mixer;
pub use thermostat::thermostat;

use emsdash_domain::device::Device;
use emsdash_domain::device_data::DeviceData;
use emsdash_domain::device_value::DeviceValue;
use emsdash_domain::error::BusError;

use crate::register::Register;

/// A device on the virtual bus with its registers.
#[derive(Debug, Clone)]
pub struct VirtualDevice {
    pub device: Device,
    pub registers: Vec<Register>,
}

impl VirtualDevice {
    /// Flatten the registers into the four-cell record layout.
    #[must_use]
    pub fn device_data(&self) -> DeviceData {
        DeviceData {
            name: self.device.display_name(),
            data: self.registers.iter().flat_map(Register::cells).collect(),
        }
    }

    /// Apply a write command to the register named by `value`.
    ///
    /// The register is matched on its label and command name.
    ///
    /// # Errors
    ///
    /// Returns [`BusError::NotWritable`] when no writable register matches,
    /// or the error of [`Register::write`].
    pub fn write(&mut self, value: &DeviceValue) -> Result<(), BusError> {
        let id = self.device.id;
        let register = self
            .registers
            .iter_mut()
            .find(|r| r.label == value.name && r.cmd.unwrap_or_default() == value.cmd)
            .ok_or_else(|| BusError::NotWritable {
                id,
                name: value.name.clone(),
            })?;
        register.write(id, &value.data)?;
        tracing::info!(device = %id, register = register.label, value = %register.value, "register written");
        Ok(())
    }
}
