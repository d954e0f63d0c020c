//! Device data: the register values a device exposes, as returned by the
//! `deviceData` endpoint.
//!
//! The gateway flattens every register into four consecutive cells:
//!
//! | offset | cell |
//! |--------|------|
//! | 0 | value |
//! | 1 | unit of measure |
//! | 2 | label |
//! | 3 | command flag (non-empty when the register is writable) |
//!
//! A record therefore always starts at an index divisible by [`RECORD_LEN`].
//! Trailing cells that do not fill a complete record are ignored.

use serde::{Deserialize, Deserializer, Serialize};

use crate::format::format_unit;
use crate::id::DeviceId;

/// Number of cells in one register record.
pub const RECORD_LEN: usize = 4;

/// Request body of the `deviceData` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDataQuery {
    pub id: DeviceId,
}

/// Register values of a single device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceData {
    /// Device name shown above the register table.
    pub name: String,
    /// Flattened register cells, see the module docs.
    #[serde(deserialize_with = "cells")]
    pub data: Vec<String>,
}

impl DeviceData {
    /// Whether the device reported no complete record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.len() < RECORD_LEN
    }

    /// Iterate over the complete records in order.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.data
            .chunks_exact(RECORD_LEN)
            .enumerate()
            .map(|(n, cells)| Record::new(n * RECORD_LEN, cells))
    }

    /// The record starting at cell `index`.
    ///
    /// Returns `None` when `index` is not a record boundary or the record is
    /// incomplete.
    #[must_use]
    pub fn record_at(&self, index: usize) -> Option<Record<'_>> {
        if index % RECORD_LEN != 0 {
            return None;
        }
        let end = index.checked_add(RECORD_LEN)?;
        self.data
            .get(index..end)
            .map(|cells| Record::new(index, cells))
    }
}

/// Borrowed view over one 4-cell register record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    index: usize,
    value: &'a str,
    unit: &'a str,
    label: &'a str,
    cmd: &'a str,
}

impl<'a> Record<'a> {
    fn new(index: usize, cells: &'a [String]) -> Self {
        Self {
            index,
            value: &cells[0],
            unit: &cells[1],
            label: &cells[2],
            cmd: &cells[3],
        }
    }

    /// Index of the record's first cell in [`DeviceData::data`].
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn value(&self) -> &'a str {
        self.value
    }

    /// Unit of measure, `None` when the register is unitless.
    #[must_use]
    pub fn unit(&self) -> Option<&'a str> {
        Some(self.unit).filter(|u| !u.is_empty())
    }

    #[must_use]
    pub fn label(&self) -> &'a str {
        self.label
    }

    /// Raw command flag cell.
    #[must_use]
    pub fn cmd(&self) -> &'a str {
        self.cmd
    }

    /// Whether the gateway accepts writes to this register.
    #[must_use]
    pub fn is_writable(&self) -> bool {
        !self.cmd.is_empty()
    }

    /// Value followed by its unit, e.g. `65 °C`.
    #[must_use]
    pub fn formatted_value(&self) -> String {
        match format_unit(self.unit()) {
            Some(suffix) => format!("{}{suffix}", self.value),
            None => self.value.to_string(),
        }
    }
}

/// Decode cells, mapping JSON `null` to an empty cell.
fn cells<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Option<String>>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(Option::unwrap_or_default).collect())
}
