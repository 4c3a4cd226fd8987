use crate::index::snapshot::{HexDetail, HexSummary, IndexSnapshot};
use crate::index::stats::{Direction, HexStats};
use crate::message::{HexAddress, Message};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Per-hex message lists and counters, shared between the tailer (sole
/// writer) and any number of readers.
///
/// Every query returns an owned copy taken under one read lock, so callers
/// never need further synchronisation and never see half an ingest.
#[derive(Debug, Default)]
pub struct AggregationIndex {
    state: RwLock<IndexState>,
}

#[derive(Debug, Default)]
struct IndexState {
    messages_by_hex: HashMap<HexAddress, Vec<Arc<Message>>>,
    total_messages: u64,
    from_type_counts: BTreeMap<String, u64>,
    to_type_counts: BTreeMap<String, u64>,
    /// Stats in first-seen order; `slots` maps a hex to its position.
    stats: Vec<(HexAddress, HexStats)>,
    slots: HashMap<HexAddress, usize>,
}

impl IndexState {
    fn stats_entry(&mut self, hex: &HexAddress) -> &mut HexStats {
        let slot = match self.slots.get(hex) {
            Some(&slot) => slot,
            None => {
                let slot = self.stats.len();
                self.stats.push((hex.clone(), HexStats::default()));
                self.slots.insert(hex.clone(), slot);
                slot
            }
        };

        &mut self.stats[slot].1
    }

    fn append_message(&mut self, hex: &HexAddress, message: &Arc<Message>) {
        self.messages_by_hex
            .entry(hex.clone())
            .or_default()
            .push(Arc::clone(message));
    }
}

impl AggregationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    // Ingest does no fallible work under the lock, so a poisoned lock still
    // guards consistent state.
    fn read(&self) -> RwLockReadGuard<'_, IndexState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Ingest
impl AggregationIndex {
    /// Record `message` against each endpoint it names.
    ///
    /// A message with no endpoint is dropped without touching any counter.
    pub fn ingest(&self, message: Message) {
        if !message.has_endpoint() {
            return;
        }

        let at = message.timestamp();
        let message = Arc::new(message);
        let mut state = self.write();

        if let Some(from) = message.sender() {
            state.append_message(&from.hex, &message);
            *state.from_type_counts.entry(from.kind.clone()).or_insert(0) += 1;
            state.stats_entry(&from.hex).record_tx(at);
        }

        if let Some(to) = message.receiver() {
            state.append_message(&to.hex, &message);
            *state.to_type_counts.entry(to.kind.clone()).or_insert(0) += 1;
            state.stats_entry(&to.hex).record_rx(at);
        }

        state.total_messages += 1;
    }
}

/// Queries (read-only snapshots)
impl AggregationIndex {
    pub fn total_message_count(&self) -> u64 {
        self.read().total_messages
    }

    pub fn type_counts(&self, direction: Direction) -> BTreeMap<String, u64> {
        let state = self.read();
        match direction {
            Direction::From => state.from_type_counts.clone(),
            Direction::To => state.to_type_counts.clone(),
        }
    }

    /// Number of distinct hexes seen so far.
    pub fn hex_count(&self) -> usize {
        self.read().stats.len()
    }

    /// All hexes, most recently active first. Ties keep first-seen order.
    pub fn hexes_by_recency(&self) -> Vec<(HexAddress, HexStats)> {
        let mut hexes = self.read().stats.clone();
        sort_by_recency(&mut hexes);
        hexes
    }

    pub fn stats_for_hex(&self, hex: &str) -> Option<HexStats> {
        let state = self.read();
        state.slots.get(hex).map(|&slot| state.stats[slot].1)
    }

    /// Messages naming `hex`, newest first. Messages without a timestamp sort
    /// last; equal timestamps keep arrival order. Unknown hexes yield an
    /// empty list.
    pub fn messages_for_hex(&self, hex: &str) -> Vec<Arc<Message>> {
        let mut messages = self
            .read()
            .messages_by_hex
            .get(hex)
            .cloned()
            .unwrap_or_default();

        sort_newest_first(&mut messages);
        messages
    }

    /// Stats and the `limit` newest messages of one hex, from the same instant.
    pub fn hex_detail(&self, hex: &str, limit: usize) -> HexDetail {
        let (stats, mut messages) = {
            let state = self.read();
            (
                state.slots.get(hex).map(|&slot| state.stats[slot].1),
                state.messages_by_hex.get(hex).cloned().unwrap_or_default(),
            )
        };

        let total_messages = messages.len();
        sort_newest_first(&mut messages);
        messages.truncate(limit);

        HexDetail {
            hex: HexAddress::from(hex),
            stats,
            total_messages,
            messages,
        }
    }

    /// Totals, type counts and the `limit` most recent hexes, all from the
    /// same instant.
    pub fn snapshot(&self, limit: usize) -> IndexSnapshot {
        let state = self.read();

        let mut hexes = state.stats.clone();
        let hex_count = hexes.len();
        sort_by_recency(&mut hexes);
        hexes.truncate(limit);

        IndexSnapshot {
            total_messages: state.total_messages,
            hex_count,
            from_type_counts: state.from_type_counts.clone(),
            to_type_counts: state.to_type_counts.clone(),
            hexes: hexes
                .into_iter()
                .map(|(hex, stats)| HexSummary {
                    last_seen: stats.last_rx.max(stats.last_tx),
                    hex,
                    stats,
                })
                .collect(),
        }
    }
}

fn sort_newest_first(messages: &mut [Arc<Message>]) {
    messages.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
}

fn sort_by_recency(hexes: &mut [(HexAddress, HexStats)]) {
    hexes.sort_by(|(_, a), (_, b)| b.last_seen().cmp(&a.last_seen()));
}
