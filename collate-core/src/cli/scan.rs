use crate::cli::watch::{render_dashboard, render_hex};
use crate::index::AggregationIndex;
use crate::ingest::Records;
use crate::message::parse_message;
use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Index the current contents of `path` once, without following it.
pub fn scan_file(path: &Path) -> Result<AggregationIndex> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);

    let index = AggregationIndex::new();
    let mut records = 0usize;

    for record in Records::new(text.lines().map(str::to_string)) {
        records += 1;
        index.ingest(parse_message(record));
    }

    tracing::info!(
        path = %path.display(),
        records,
        messages = index.total_message_count(),
        hexes = index.hex_count(),
        "scan complete"
    );

    Ok(index)
}

pub fn run_scan(path: &Path, hex: Option<&str>, json: bool, limit: usize) -> Result<()> {
    let index = scan_file(path)?;

    match (hex, json) {
        (Some(hex), true) => println!(
            "{}",
            serde_json::to_string_pretty(&index.hex_detail(hex, limit))?
        ),
        (Some(hex), false) => print!("{}", render_hex(&index.hex_detail(hex, limit))),
        (None, true) => println!("{}", serde_json::to_string_pretty(&index.snapshot(limit))?),
        (None, false) => print!(
            "{}",
            render_dashboard(
                &index.snapshot(limit),
                Local::now().naive_local(),
                Duration::ZERO
            )
        ),
    }

    Ok(())
}
