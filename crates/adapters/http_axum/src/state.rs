//! Shared application state for axum handlers.

use std::path::PathBuf;
use std::sync::Arc;

use emsdash_app::ports::Bus;
use emsdash_app::services::bus_service::BusService;
use emsdash_domain::viewer::Viewer;

/// Application state shared across all axum handlers.
///
/// `Clone` is implemented manually so the bus itself does not need to be
/// `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<B> {
    /// Bus use-cases.
    pub bus_service: Arc<BusService<B>>,
    /// Account every request is served as.
    pub viewer: Arc<Viewer>,
    /// Directory holding the compiled dashboard, `None` to serve the API only.
    pub assets_dir: Option<PathBuf>,
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            bus_service: Arc::clone(&self.bus_service),
            viewer: Arc::clone(&self.viewer),
            assets_dir: self.assets_dir.clone(),
        }
    }
}

impl<B> AppState<B>
where
    B: Bus + 'static,
{
    /// Create a new application state.
    pub fn new(bus_service: BusService<B>, viewer: Viewer) -> Self {
        Self {
            bus_service: Arc::new(bus_service),
            viewer: Arc::new(viewer),
            assets_dir: None,
        }
    }

    /// Serve the dashboard from `dir` for paths outside the API.
    #[must_use]
    pub fn with_assets(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = Some(dir.into());
        self
    }
}
