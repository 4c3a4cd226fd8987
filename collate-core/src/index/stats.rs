use chrono::NaiveDateTime;
use serde::Serialize;

/// Running traffic counters for one hex.
///
/// `last_rx`/`last_tx` hold the newest timestamp seen in that direction. A
/// message without a timestamp bumps the count but leaves the time as it
/// was rather than clearing it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HexStats {
    /// Times this hex was the destination.
    pub rx_count: u64,
    pub last_rx: Option<NaiveDateTime>,
    /// Times this hex was the source.
    pub tx_count: u64,
    pub last_tx: Option<NaiveDateTime>,
}

impl HexStats {
    /// Most recent activity in either direction; never-seen sorts first.
    pub fn last_seen(&self) -> NaiveDateTime {
        self.last_rx
            .max(self.last_tx)
            .unwrap_or(NaiveDateTime::MIN)
    }

    pub(crate) fn record_rx(&mut self, at: Option<NaiveDateTime>) {
        self.rx_count += 1;
        if at.is_some() {
            self.last_rx = at;
        }
    }

    pub(crate) fn record_tx(&mut self, at: Option<NaiveDateTime>) {
        self.tx_count += 1;
        if at.is_some() {
            self.last_tx = at;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    From,
    To,
}
