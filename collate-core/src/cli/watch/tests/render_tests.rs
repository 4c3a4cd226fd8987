use crate::cli::watch::{format_age, format_time, render_dashboard, render_hex};
use crate::index::AggregationIndex;
use crate::message::parse_message;
use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn at(hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 8, 1)
        .unwrap()
        .and_hms_opt(hh, mm, ss)
        .unwrap()
}

fn sample_index() -> AggregationIndex {
    let index = AggregationIndex::new();
    index.ingest(parse_message(vec![
        "[2021-08-01 12:00:00] [136.975] [-20.0/-40.0 dBFS] [21.8 dB]".to_string(),
        "ABCD12 (Aircraft, Airborne) -> EF5678 (Ground station, x): Command".to_string(),
        "  ACARS: .N123AB".to_string(),
    ]));
    index
}

#[test]
fn age_uses_coarse_units() {
    let now = at(12, 0, 0);

    assert_eq!(format_age(now, None), "-");
    assert_eq!(format_age(now, Some(at(11, 59, 18))), "42s");
    assert_eq!(format_age(now, Some(at(11, 53, 0))), "7m");
    assert_eq!(format_age(now, Some(at(9, 0, 0))), "3h");
    assert_eq!(format_age(now, Some(at(12, 5, 0))), "0s");
}

#[test]
fn time_placeholder_for_unset() {
    assert_eq!(format_time(None), "-");
    assert_eq!(format_time(Some(at(1, 2, 3))), "2021-08-01 01:02:03");
}

#[test]
fn dashboard_lists_totals_types_and_hexes() {
    // Arrange
    let index = sample_index();

    // Act
    let out = render_dashboard(&index.snapshot(10), at(12, 1, 0), Duration::from_secs(1));

    // Assert
    assert!(out.contains("messages: 1 | hexes: 2"));
    assert!(out.contains("Aircraft"));
    assert!(out.contains("ABCD12"));
    assert!(out.contains("EF5678"));
    assert!(out.contains("1m"));
    assert!(!out.contains("more"));
}

#[test]
fn dashboard_mentions_hidden_rows() {
    let index = sample_index();

    let out = render_dashboard(&index.snapshot(1), at(12, 1, 0), Duration::from_secs(1));

    assert!(out.contains("... 1 more"));
}

#[test]
fn dashboard_on_empty_index() {
    let index = AggregationIndex::new();

    let out = render_dashboard(&index.snapshot(10), at(12, 0, 0), Duration::from_secs(1));

    assert!(out.contains("messages: 0 | hexes: 0"));
    assert!(out.contains("Hexes: <none yet>"));
}

#[test]
fn hex_view_shows_header_and_raw_lines() {
    // Arrange
    let index = sample_index();

    // Act
    let out = render_hex(&index.hex_detail("EF5678", 5));

    // Assert
    assert!(out.starts_with("Hex EF5678\n"));
    assert!(out.contains("RX: 1 (last 2021-08-01 12:00:00) | TX: 0 (last -)"));
    assert!(out.contains("showing 1 of 1 messages"));
    assert!(out.contains("[2021-08-01 12:00:00] 136.975 21.8 dB  ABCD12 (Aircraft) -> EF5678 (Ground station)"));
    assert!(out.contains("    ACARS: .N123AB"));
}

#[test]
fn hex_view_for_unknown_hex() {
    let index = sample_index();

    let out = render_hex(&index.hex_detail("000000", 5));

    assert_eq!(out, "Hex 000000: not seen yet\n");
}
