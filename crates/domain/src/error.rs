//! Error types shared by every layer that talks to the gateway REST API.

use crate::id::DeviceId;

/// Failure of a call to the gateway REST API.
///
/// Expected negative outcomes (e.g. a refused write) are not errors; they are
/// modelled by [`WriteOutcome`](crate::device_value::WriteOutcome).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The endpoint answered with a status code it is not expected to return.
    #[error("Unexpected response code: {0}")]
    UnexpectedStatus(u16),

    /// The scan endpoint answered with something other than `200`.
    #[error("Invalid status code: {0}")]
    InvalidStatus(u16),

    /// The session is missing or expired.
    #[error("Not authorized")]
    Unauthorized,

    /// The request never produced a response.
    #[error("{0}")]
    Network(String),

    /// The response body could not be decoded.
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    /// Map a status code to the error returned for unenumerated responses.
    ///
    /// `401` is always reported as [`ApiError::Unauthorized`].
    #[must_use]
    pub fn unexpected(status: u16) -> Self {
        if status == 401 {
            Self::Unauthorized
        } else {
            Self::UnexpectedStatus(status)
        }
    }

    /// Accept only `200`, the status of every JSON read endpoint.
    ///
    /// # Errors
    ///
    /// Any other status, as mapped by [`ApiError::unexpected`].
    pub fn expect_ok(status: u16) -> Result<(), Self> {
        if status == 200 {
            Ok(())
        } else {
            Err(Self::unexpected(status))
        }
    }

    /// Map the answer of the scan endpoint.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthorized`] for `401`, [`ApiError::InvalidStatus`] for
    /// anything else but `200`.
    pub fn scan_status(status: u16) -> Result<(), Self> {
        match status {
            200 => Ok(()),
            401 => Err(Self::Unauthorized),
            other => Err(Self::InvalidStatus(other)),
        }
    }

    /// The user-facing message, or `fallback` when the error carries none.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}

/// Violation of a domain invariant when constructing a model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A device was built without its type label.
    #[error("device type must not be empty")]
    EmptyType,

    /// A device was built without a name.
    #[error("device name must not be empty")]
    EmptyName,

    #[error("unknown bus connection code {0}")]
    UnknownBusConnection(u8),
}

/// Failure reported by the bus side of the gateway.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BusError {
    #[error("no device with id {0}")]
    UnknownDevice(DeviceId),

    #[error("register {name:?} of device {id} is read-only")]
    NotWritable { id: DeviceId, name: String },

    #[error("invalid value {value:?} for {name:?}")]
    InvalidValue { name: String, value: String },
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
