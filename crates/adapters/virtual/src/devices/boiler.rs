use emsdash_domain::device::Device;
use emsdash_domain::error::ValidationError;
use emsdash_domain::id::DeviceId;

use super::VirtualDevice;
use crate::register::Register;

const CELSIUS: &str = "\u{b0}C";

/// A gas boiler at bus address 0x08.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the device metadata is rejected.
pub fn boiler(id: DeviceId) -> Result<VirtualDevice, ValidationError> {
    let device = Device::builder()
        .id(id)
        .device_type("Boiler")
        .brand("Buderus")
        .name("GB125/BC10")
        .deviceid(0x08)
        .productid(123)
        .version("04.05")
        .build()?;

    let registers = vec![
        Register::sensor("Selected Flow Temp", "45", CELSIUS),
        Register::sensor("Current Flow Temp", "43.8", CELSIUS),
        Register::sensor("Return Temp", "37.2", CELSIUS),
        Register::sensor("Burner Power", "32", "%"),
        Register::sensor("Service Code", "0H", ""),
        Register::setpoint("Flow Temp", "65", CELSIUS, "flowtemp", (20.0, 90.0)),
        Register::setpoint("Warm Water Set Temp", "55", CELSIUS, "wwtemp", (30.0, 80.0)),
        Register::choice("Warm Water Active", "on", "wwactivated", &["on", "off"]),
    ];

    Ok(VirtualDevice { device, registers })
}
