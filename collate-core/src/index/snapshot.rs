use crate::index::stats::HexStats;
use crate::message::{HexAddress, Message};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Point-in-time view of the index, detached from the lock.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IndexSnapshot {
    pub total_messages: u64,
    pub hex_count: usize,
    pub from_type_counts: BTreeMap<String, u64>,
    pub to_type_counts: BTreeMap<String, u64>,
    /// Most recently active first, truncated to the requested limit.
    pub hexes: Vec<HexSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HexSummary {
    pub hex: HexAddress,
    #[serde(flatten)]
    pub stats: HexStats,
    pub last_seen: Option<NaiveDateTime>,
}

/// Everything known about one hex, read under a single lock.
#[derive(Debug, Clone, Serialize)]
pub struct HexDetail {
    pub hex: HexAddress,
    /// `None` when the hex has never been seen.
    pub stats: Option<HexStats>,
    pub total_messages: usize,
    /// Newest first, truncated to the requested limit.
    pub messages: Vec<Arc<Message>>,
}
