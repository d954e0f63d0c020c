use emsdash_domain::device::Device;
use emsdash_domain::error::ValidationError;
use emsdash_domain::id::DeviceId;

use super::VirtualDevice;
use crate::register::Register;

const CELSIUS: &str = "\u{b0}C";

/// A room controller at bus address 0x10.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the device metadata is rejected.
pub fn thermostat(id: DeviceId) -> Result<VirtualDevice, ValidationError> {
    let device = Device::builder()
        .id(id)
        .device_type("Thermostat")
        .brand("Buderus")
        .name("RC35")
        .deviceid(0x10)
        .productid(86)
        .version("01.04")
        .build()?;

    let registers = vec![
        Register::sensor("Time", "17.10.2026 08:12", ""),
        Register::sensor("Outside Temp", "6.4", CELSIUS),
        Register::sensor("HC1 Current Room Temp", "20.6", CELSIUS),
        Register::setpoint("HC1 Setpoint Room Temp", "21", CELSIUS, "temp", (5.0, 29.0)),
        Register::setpoint("HC1 Night Temp", "17", CELSIUS, "nighttemp", (5.0, 29.0)),
        Register::choice("HC1 Mode", "auto", "mode", &["auto", "day", "night"]),
    ];

    Ok(VirtualDevice { device, registers })
}
