//! Simulated device registers.

use emsdash_domain::device_data::RECORD_LEN;
use emsdash_domain::error::BusError;
use emsdash_domain::id::DeviceId;

/// Accepted values of a writable register.
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterKind {
    /// Decimal number within an inclusive range.
    Numeric { min: f64, max: f64 },
    /// One of a fixed set of keywords.
    Choice(&'static [&'static str]),
}

/// One register of a virtual device.
#[derive(Debug, Clone, PartialEq)]
pub struct Register {
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
    /// Command name; `None` for read-only registers.
    pub cmd: Option<&'static str>,
    pub kind: RegisterKind,
}

impl Register {
    /// A read-only register.
    #[must_use]
    pub fn sensor(label: &'static str, value: impl Into<String>, unit: &'static str) -> Self {
        Self {
            label,
            value: value.into(),
            unit,
            cmd: None,
            kind: RegisterKind::Numeric {
                min: f64::MIN,
                max: f64::MAX,
            },
        }
    }

    /// A writable numeric register.
    #[must_use]
    pub fn setpoint(
        label: &'static str,
        value: impl Into<String>,
        unit: &'static str,
        cmd: &'static str,
        range: (f64, f64),
    ) -> Self {
        Self {
            label,
            value: value.into(),
            unit,
            cmd: Some(cmd),
            kind: RegisterKind::Numeric {
                min: range.0,
                max: range.1,
            },
        }
    }

    /// A writable keyword register.
    #[must_use]
    pub fn choice(
        label: &'static str,
        value: impl Into<String>,
        cmd: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            label,
            value: value.into(),
            unit: "",
            cmd: Some(cmd),
            kind: RegisterKind::Choice(options),
        }
    }

    /// The four cells this register contributes to the device data.
    #[must_use]
    pub fn cells(&self) -> [String; RECORD_LEN] {
        [
            self.value.clone(),
            self.unit.to_string(),
            self.label.to_string(),
            self.cmd.unwrap_or_default().to_string(),
        ]
    }

    /// Apply a new value.
    ///
    /// # Errors
    ///
    /// Returns [`BusError::NotWritable`] for read-only registers and
    /// [`BusError::InvalidValue`] when `value` is out of range or not an
    /// accepted keyword.
    pub fn write(&mut self, device: DeviceId, value: &str) -> Result<(), BusError> {
        if self.cmd.is_none() {
            return Err(BusError::NotWritable {
                id: device,
                name: self.label.to_string(),
            });
        }
        let value = value.trim();
        let accepted = match &self.kind {
            RegisterKind::Numeric { min, max } => value
                .parse::<f64>()
                .is_ok_and(|v| (*min..=*max).contains(&v)),
            RegisterKind::Choice(options) => options.iter().any(|o| *o == value),
        };
        if !accepted {
            return Err(BusError::InvalidValue {
                name: self.label.to_string(),
                value: value.to_string(),
            });
        }
        self.value = value.to_string();
        Ok(())
    }
}
