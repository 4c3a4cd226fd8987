//! Collate decoded VDL2/ACARS traffic by radio endpoint.
//!
//! The core follows a growing decoder log, turns each blank-line-delimited
//! record into a [`message::Message`] and aggregates them per hex in an
//! [`index::AggregationIndex`] that any number of readers can query while
//! the tailer keeps appending.

pub mod cli;
pub mod conf;
pub mod index;
pub mod ingest;
pub mod logging;
pub mod message;
