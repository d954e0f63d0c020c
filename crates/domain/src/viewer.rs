//! Viewer: the identity the dashboard is rendered for.

use serde::{Deserialize, Serialize};

/// Signed-in user, as reported by the `me` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub username: String,
    /// Administrators may write register values and trigger bus scans.
    #[serde(default)]
    pub admin: bool,
}

impl Viewer {
    /// Whether the edit affordance is shown for writable registers.
    #[must_use]
    pub fn can_write(&self) -> bool {
        self.admin
    }
}
