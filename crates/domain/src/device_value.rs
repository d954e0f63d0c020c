//! Device value: a write command composed from one writable register record.

use serde::{Deserialize, Serialize};

use crate::device_data::Record;
use crate::error::ApiError;
use crate::id::DeviceId;
use crate::notification::Notification;

/// Edit buffer sent to the `writeValue` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceValue {
    /// Device the register belongs to.
    pub id: DeviceId,
    /// New value.
    pub data: String,
    /// Unit of measure.
    pub uom: String,
    /// Register label.
    pub name: String,
    /// Command the gateway runs to apply the value.
    pub cmd: String,
}

impl DeviceValue {
    /// Seed an edit buffer from a register record of device `id`.
    #[must_use]
    pub fn from_record(id: DeviceId, record: &Record<'_>) -> Self {
        Self {
            id,
            data: record.value().to_string(),
            uom: record.unit().unwrap_or_default().to_string(),
            name: record.label().to_string(),
            cmd: record.cmd().to_string(),
        }
    }

    /// Replace one editable field.
    pub fn set(&mut self, field: DeviceValueField, value: impl Into<String>) {
        let slot = match field {
            DeviceValueField::Data => &mut self.data,
            DeviceValueField::Uom => &mut self.uom,
            DeviceValueField::Name => &mut self.name,
            DeviceValueField::Cmd => &mut self.cmd,
        };
        *slot = value.into();
    }
}

/// Editable fields of a [`DeviceValue`]. The device id is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceValueField {
    Data,
    Uom,
    Name,
    Cmd,
}

/// Request body of the `writeValue` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteValueRequest {
    pub devicevalue: DeviceValue,
}

/// Expected answers of the `writeValue` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// `200`: the command was queued on the bus.
    Sent,
    /// `204`: the gateway rejected the value.
    Failed,
    /// `403`: the session lacks admin rights.
    Denied,
}

impl WriteOutcome {
    /// Map the HTTP status of a write response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedStatus`] (or [`ApiError::Unauthorized`]
    /// for `401`) on any other status.
    pub fn from_status(status: u16) -> Result<Self, ApiError> {
        match status {
            200 => Ok(Self::Sent),
            204 => Ok(Self::Failed),
            403 => Ok(Self::Denied),
            other => Err(ApiError::unexpected(other)),
        }
    }

    /// HTTP status the gateway uses for this outcome.
    #[must_use]
    pub fn status(self) -> u16 {
        match self {
            Self::Sent => 200,
            Self::Failed => 204,
            Self::Denied => 403,
        }
    }

    #[must_use]
    pub fn notification(self) -> Notification {
        match self {
            Self::Sent => Notification::success("Write command sent to device"),
            Self::Failed => Notification::error("Write command failed"),
            Self::Denied => Notification::error("Write access denied"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device_data::DeviceData;
    use crate::notification::Variant;

    fn boiler_data() -> DeviceData {
        DeviceData {
            name: "Boiler".to_string(),
            data: vec![
                "65".to_string(),
                "\u{b0}C".to_string(),
                "Flow Temp".to_string(),
                "flowtemp".to_string(),
            ],
        }
    }

    #[test]
    fn should_seed_value_from_record() {
        let data = boiler_data();
        let record = data.record_at(0).unwrap();

        let value = DeviceValue::from_record(DeviceId::new(5), &record);

        assert_eq!(value.id, DeviceId::new(5));
        assert_eq!(value.data, "65");
        assert_eq!(value.uom, "\u{b0}C");
        assert_eq!(value.name, "Flow Temp");
        assert_eq!(value.cmd, "flowtemp");
    }

    #[test]
    fn should_update_single_field() {
        let data = boiler_data();
        let mut value = DeviceValue::from_record(DeviceId::new(5), &data.record_at(0).unwrap());

        value.set(DeviceValueField::Data, "70");

        assert_eq!(value.data, "70");
        assert_eq!(value.name, "Flow Temp");
    }

    #[test]
    fn should_wrap_value_in_devicevalue_key() {
        let request = WriteValueRequest {
            devicevalue: DeviceValue {
                id: DeviceId::new(5),
                data: "70".to_string(),
                uom: "\u{b0}C".to_string(),
                name: "Flow Temp".to_string(),
                cmd: "flowtemp".to_string(),
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["devicevalue"]["id"], 5);
        assert_eq!(json["devicevalue"]["data"], "70");
    }

    #[test]
    fn should_map_expected_write_statuses() {
        assert_eq!(WriteOutcome::from_status(200), Ok(WriteOutcome::Sent));
        assert_eq!(WriteOutcome::from_status(204), Ok(WriteOutcome::Failed));
        assert_eq!(WriteOutcome::from_status(403), Ok(WriteOutcome::Denied));
    }

    #[test]
    fn should_reject_unenumerated_write_status() {
        assert_eq!(
            WriteOutcome::from_status(500),
            Err(ApiError::UnexpectedStatus(500))
        );
    }

    #[test]
    fn should_notify_per_outcome() {
        let sent = WriteOutcome::Sent.notification();
        assert_eq!(sent.variant, Variant::Success);
        assert_eq!(sent.message, "Write command sent to device");

        let failed = WriteOutcome::Failed.notification();
        assert_eq!(failed.variant, Variant::Error);
        assert_eq!(failed.message, "Write command failed");

        let denied = WriteOutcome::Denied.notification();
        assert_eq!(denied.variant, Variant::Error);
        assert_eq!(denied.message, "Write access denied");
    }

    #[test]
    fn should_roundtrip_status_codes() {
        for outcome in [WriteOutcome::Sent, WriteOutcome::Failed, WriteOutcome::Denied] {
            assert_eq!(WriteOutcome::from_status(outcome.status()), Ok(outcome));
        }
    }
}
