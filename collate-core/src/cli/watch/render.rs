use crate::index::{HexDetail, IndexSnapshot};
use chrono::NaiveDateTime;
use std::io::{self, Write};
use std::time::Duration;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn render_dashboard(snapshot: &IndexSnapshot, now: NaiveDateTime, refresh: Duration) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "VDL2 Collate ({}s refresh)\n\
         ==========================\n\
         messages: {} | hexes: {}\n\n",
        refresh.as_secs().max(1),
        snapshot.total_messages,
        snapshot.hex_count
    ));

    if snapshot.from_type_counts.is_empty() {
        out.push_str("Sender types: <none yet>\n\n");
    } else {
        out.push_str("Sender types:\n");
        for (kind, count) in &snapshot.from_type_counts {
            out.push_str(&format!("  {:<24} {:>6}\n", kind, count));
        }
        out.push('\n');
    }

    if snapshot.hexes.is_empty() {
        out.push_str("Hexes: <none yet>\n");
        return out;
    }

    out.push_str(&format!(
        "{:<8} {:>6}  {:<19} {:>6}  {:<19} {:>6}\n",
        "HEX", "RX", "LAST RX", "TX", "LAST TX", "AGE"
    ));

    for row in &snapshot.hexes {
        out.push_str(&format!(
            "{:<8} {:>6}  {:<19} {:>6}  {:<19} {:>6}\n",
            row.hex,
            row.stats.rx_count,
            format_time(row.stats.last_rx),
            row.stats.tx_count,
            format_time(row.stats.last_tx),
            format_age(now, row.last_seen)
        ));
    }

    if snapshot.hex_count > snapshot.hexes.len() {
        out.push_str(&format!(
            "... {} more\n",
            snapshot.hex_count - snapshot.hexes.len()
        ));
    }

    out
}

pub fn render_hex(detail: &HexDetail) -> String {
    let mut out = String::new();

    let Some(stats) = detail.stats else {
        out.push_str(&format!("Hex {}: not seen yet\n", detail.hex));
        return out;
    };

    out.push_str(&format!(
        "Hex {}\n\
         RX: {} (last {}) | TX: {} (last {})\n\
         showing {} of {} messages\n",
        detail.hex,
        stats.rx_count,
        format_time(stats.last_rx),
        stats.tx_count,
        format_time(stats.last_tx),
        detail.messages.len(),
        detail.total_messages
    ));

    for message in &detail.messages {
        out.push('\n');

        match message.acquisition() {
            Some(a) => out.push_str(&format!(
                "[{}] {:.3} {:.1} dB  {}\n",
                a.timestamp.format(TIME_FORMAT),
                a.frequency,
                a.signal_level,
                message.summary()
            )),
            None => out.push_str(&format!("[{}]  {}\n", format_time(None), message.summary())),
        }

        for line in message.raw() {
            out.push_str(&format!("  {line}\n"));
        }
    }

    out
}

pub fn format_time(at: Option<NaiveDateTime>) -> String {
    match at {
        Some(at) => at.format(TIME_FORMAT).to_string(),
        None => "-".to_string(),
    }
}

/// Coarse "time since" for the hex table: `42s`, `7m`, `3h`, `2d`.
pub fn format_age(now: NaiveDateTime, then: Option<NaiveDateTime>) -> String {
    let Some(then) = then else {
        return "-".to_string();
    };

    let secs = (now - then).num_seconds().max(0);
    match secs {
        0..60 => format!("{secs}s"),
        60..3_600 => format!("{}m", secs / 60),
        3_600..86_400 => format!("{}h", secs / 3_600),
        _ => format!("{}d", secs / 86_400),
    }
}

pub fn redraw(output: &str) {
    print!("\x1b[2J\x1b[H");
    println!("{output}");
    let _ = io::stdout().flush();
}
