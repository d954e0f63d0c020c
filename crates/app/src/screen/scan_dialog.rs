//! Scan confirmation dialog state machine.
//!
//! ```text
//! Closed --request--> Confirming --confirm--> Processing --finish--> Closed
//!                          |
//!                          +------cancel------> Closed
//! ```

/// State of the "Scan Devices" confirmation dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanDialog {
    #[default]
    Closed,
    /// Dialog open, waiting for the user to confirm or cancel.
    Confirming,
    /// Scan request in flight; the dialog stays open with its start button disabled.
    Processing,
}

impl ScanDialog {
    pub const TITLE: &'static str = "Confirm Scan Devices";
    pub const PROMPT: &'static str =
        "Are you sure you want to initiate a scan on the EMS bus for all new devices?";

    /// Open the dialog. Ignored unless closed.
    pub fn request(&mut self) {
        if *self == Self::Closed {
            *self = Self::Confirming;
        }
    }

    /// Close the dialog without scanning. Ignored while a scan request is in
    /// flight, it cannot be withdrawn.
    pub fn cancel(&mut self) {
        if *self == Self::Confirming {
            *self = Self::Closed;
        }
    }

    /// Confirm the scan.
    ///
    /// Returns `true` when the caller must issue the scan request; repeated
    /// confirmations while processing return `false`.
    pub fn confirm(&mut self) -> bool {
        if *self == Self::Confirming {
            *self = Self::Processing;
            true
        } else {
            false
        }
    }

    /// The scan request resolved, successfully or not.
    pub fn finish(&mut self) {
        *self = Self::Closed;
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self != Self::Closed
    }

    #[must_use]
    pub fn is_processing(self) -> bool {
        self == Self::Processing
    }
}
