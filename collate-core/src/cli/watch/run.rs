use crate::cli::watch::constants::{HIDE_CURSOR, LOOP_IDLE_SLEEP, SHOW_CURSOR};
use crate::cli::watch::render::{redraw, render_dashboard, render_hex};
use crate::index::AggregationIndex;
use crate::ingest::spawn_tailer;
use anyhow::Result;
use chrono::Local;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchOutput {
    /// Full-screen redraw every tick.
    Dashboard,
    /// One JSON document per tick on stdout.
    Json,
}

#[derive(Debug, Clone)]
pub struct WatchOptions {
    pub log_file: PathBuf,
    pub poll_interval: Duration,
    pub refresh: Duration,
    pub max_hexes: usize,
    pub max_messages: usize,
    /// Focus on a single hex instead of the overview.
    pub hex: Option<String>,
    pub output: WatchOutput,
}

/// Follow the log and keep rendering the index until Ctrl-C.
pub fn run_watch(opts: WatchOptions) -> Result<()> {
    let index = Arc::new(AggregationIndex::new());

    // Detached: the tailer lives as long as the process.
    let _tailer = spawn_tailer(&opts.log_file, opts.poll_interval, Arc::clone(&index))?;

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = Arc::clone(&running);
        ctrlc::set_handler(move || running.store(false, Ordering::SeqCst))?;
    }

    if opts.output == WatchOutput::Dashboard {
        print!("{HIDE_CURSOR}");
        let _ = io::stdout().flush();
    }

    let mut last_render: Option<Instant> = None;
    let result = loop {
        if !running.load(Ordering::SeqCst) {
            break Ok(());
        }

        if last_render.is_none_or(|t| t.elapsed() >= opts.refresh) {
            if let Err(e) = render_tick(&index, &opts) {
                break Err(e);
            }
            last_render = Some(Instant::now());
        }

        thread::sleep(LOOP_IDLE_SLEEP);
    };

    if opts.output == WatchOutput::Dashboard {
        print!("{SHOW_CURSOR}");
        let _ = io::stdout().flush();
    }

    tracing::info!(
        messages = index.total_message_count(),
        hexes = index.hex_count(),
        "watch stopped"
    );

    result
}

fn render_tick(index: &AggregationIndex, opts: &WatchOptions) -> Result<()> {
    match (&opts.hex, opts.output) {
        (Some(hex), WatchOutput::Dashboard) => {
            redraw(&render_hex(&index.hex_detail(hex, opts.max_messages)));
        }
        (None, WatchOutput::Dashboard) => {
            let now = Local::now().naive_local();
            redraw(&render_dashboard(
                &index.snapshot(opts.max_hexes),
                now,
                opts.refresh,
            ));
        }
        (Some(hex), WatchOutput::Json) => {
            println!(
                "{}",
                serde_json::to_string(&index.hex_detail(hex, opts.max_messages))?
            );
        }
        (None, WatchOutput::Json) => {
            println!("{}", serde_json::to_string(&index.snapshot(opts.max_hexes))?);
        }
    }

    Ok(())
}
