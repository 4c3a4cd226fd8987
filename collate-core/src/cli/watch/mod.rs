//! Live view over a tailed decoder log
//!
//! A background thread follows the log and feeds the index; the foreground
//! loop takes a snapshot every refresh tick and either redraws a terminal
//! dashboard or prints it as JSON.
//!
//! log file
//! Tailer (background thread)
//! AggregationIndex
//! IndexSnapshot / HexDetail
//! render_dashboard / render_hex

mod constants;
mod render;
mod run;

#[cfg(test)]
mod tests;

pub use render::{format_age, format_time, render_dashboard, render_hex};
pub use run::{WatchOptions, WatchOutput, run_watch};
