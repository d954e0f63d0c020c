//! View state of the devices screen.
//!
//! Everything here is synchronous and IO-free: transitions return the request
//! to issue (if any) and the caller feeds the response back in.

pub mod devices_screen;
pub mod scan_dialog;

pub use devices_screen::{DetailView, DeviceDataRequest, DevicesScreen, RecordRow, RequestToken};
pub use scan_dialog::ScanDialog;
