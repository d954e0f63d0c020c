//! Bus status: telegram traffic counters and link health of the EMS bus.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Health of the link to the EMS bus, sent as `0`, `1` or `2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum BusConnection {
    #[default]
    Connected,
    /// Telegrams are received but some transmissions went unanswered.
    TxIssues,
    Disconnected,
}

impl From<BusConnection> for u8 {
    fn from(connection: BusConnection) -> Self {
        match connection {
            BusConnection::Connected => 0,
            BusConnection::TxIssues => 1,
            BusConnection::Disconnected => 2,
        }
    }
}

impl TryFrom<u8> for BusConnection {
    type Error = ValidationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Connected),
            1 => Ok(Self::TxIssues),
            2 => Ok(Self::Disconnected),
            other => Err(ValidationError::UnknownBusConnection(other)),
        }
    }
}

/// Body of the `busStatus` endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusStatus {
    pub status: BusConnection,
    pub rx_received: u32,
    /// Read and write requests together.
    pub tx_sent: u32,
    /// Percentage of telegrams received intact.
    pub rx_quality: u8,
    /// Percentage of transmissions that were answered.
    pub tx_quality: u8,
}

/// Running telegram counters of a bus connection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TelegramCounters {
    received: u32,
    rx_errors: u32,
    reads: u32,
    writes: u32,
    tx_errors: u32,
}

impl TelegramCounters {
    pub fn record_received(&mut self) {
        self.received = self.received.saturating_add(1);
    }

    /// A telegram arrived but could not be decoded.
    pub fn record_rx_error(&mut self) {
        self.rx_errors = self.rx_errors.saturating_add(1);
    }

    pub fn record_read(&mut self) {
        self.reads = self.reads.saturating_add(1);
    }

    pub fn record_write(&mut self) {
        self.writes = self.writes.saturating_add(1);
    }

    /// A transmitted telegram was not acknowledged.
    pub fn record_tx_error(&mut self) {
        self.tx_errors = self.tx_errors.saturating_add(1);
    }

    #[must_use]
    pub fn tx_sent(&self) -> u32 {
        self.reads.saturating_add(self.writes)
    }

    #[must_use]
    pub fn rx_quality(&self) -> u8 {
        quality(self.rx_errors, u64::from(self.received) + u64::from(self.rx_errors))
    }

    #[must_use]
    pub fn tx_quality(&self) -> u8 {
        quality(self.tx_errors, u64::from(self.reads) + u64::from(self.writes))
    }

    /// Status snapshot; `online` is whether the bus is reachable at all.
    #[must_use]
    pub fn status(&self, online: bool) -> BusStatus {
        let status = if !online {
            BusConnection::Disconnected
        } else if self.tx_errors > 0 {
            BusConnection::TxIssues
        } else {
            BusConnection::Connected
        };
        BusStatus {
            status,
            rx_received: self.received,
            tx_sent: self.tx_sent(),
            rx_quality: self.rx_quality(),
            tx_quality: self.tx_quality(),
        }
    }
}

/// Share of good telegrams in percent; 100 while nothing went wrong.
fn quality(errors: u32, total: u64) -> u8 {
    if errors == 0 || total == 0 {
        return 100;
    }
    let failed = (u64::from(errors) * 100 / total).min(100);
    u8::try_from(100 - failed).unwrap_or(0)
}
