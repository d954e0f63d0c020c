use emsdash_domain::device::Device;
use emsdash_domain::error::ValidationError;
use emsdash_domain::id::DeviceId;

use super::VirtualDevice;
use crate::register::Register;

/// A heating-circuit mixing module at bus address 0x20.
///
/// Absent at startup; appears on the bus after a device scan.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the device metadata is rejected.
pub fn mixer(id: DeviceId) -> Result<VirtualDevice, ValidationError> {
    let device = Device::builder()
        .id(id)
        .device_type("Mixing Module")
        .brand("Buderus")
        .name("MM10")
        .deviceid(0x20)
        .productid(69)
        .version("02.01")
        .build()?;

    let registers = vec![
        Register::sensor("HC2 Flow Temp", "38.5", "\u{b0}C"),
        Register::sensor("HC2 Valve Position", "40", "%"),
        Register::sensor("HC2 Pump", "on", ""),
    ];

    Ok(VirtualDevice { device, registers })
}
