//! Log ingestion
//!
//! Appended bytes become indexed messages in four steps:
//!
//! log file
//! FollowReader (complete lines, polling at EOF)
//! RecordSplitter (blank-line delimited records)
//! parse_message
//! AggregationIndex::ingest
//!
//! The whole chain runs on one background thread, which is the only writer
//! to the index.

mod constants;
mod error;
mod splitter;
mod tail;

#[cfg(test)]
mod tests;

pub use constants::DEFAULT_POLL_INTERVAL;
pub use error::TailError;
pub use splitter::{Record, RecordSplitter, Records};
pub use tail::{FollowReader, Tailer, spawn_tailer};
