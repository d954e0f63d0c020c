//! # emsdash-app
//!
//! Application layer: use-cases, view state and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `Gateway`: REST calls the dashboard issues to the gateway
//!   - `Notifier`: surfaces transient notifications to the user
//!   - `Bus`: the bus side of the gateway, served over HTTP
//! - Hold the **devices screen state** (`screen`): selection, register data,
//!   edit buffer and the scan confirmation dialog
//! - Provide **use-case services** that call the ports and turn every outcome
//!   into a notification
//!
//! ## Dependency rule
//! Depends on `emsdash-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod screen;
pub mod services;
