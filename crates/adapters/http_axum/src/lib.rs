//! # emsdash-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the gateway **REST API** under `/rest` (`allDevices`, `me`,
//!   `scanDevices`, `deviceData`, `writeValue`, `busStatus`) consumed by the dashboard
//! - Serve the compiled dashboard assets for every other path
//! - Map HTTP requests into [`BusService`](emsdash_app::services::bus_service::BusService)
//!   calls and map their results onto the status codes the dashboard expects
//!
//! ## Dependency rule
//! Depends on `emsdash-app` (for port traits and services) and `emsdash-domain`
//! (for wire types). Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
