//! # emsdash-domain
//!
//! Pure domain model for the EMS gateway dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, display formatting
//! - Define **Devices** (units discovered on the EMS heating bus)
//! - Define **Sensors** (external temperature probes reporting to the gateway)
//! - Define **Device data** (register values grouped in 4-cell records)
//! - Define **Device values** (write commands composed from a writable record)
//! - Define **Notifications** surfaced to the user after each backend call
//! - Define **Bus status** (telegram counters and link health)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod format;
pub mod id;

pub mod bus_status;
pub mod device;
pub mod device_data;
pub mod device_value;
pub mod inventory;
pub mod notification;
pub mod sensor;
pub mod viewer;
