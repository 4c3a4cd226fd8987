use crate::message::types::{Acquisition, Endpoint, HexAddress, Message};
use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

// [2021-08-01 12:30:00 UTC] [136.975] [-21.3/-43.1 dBFS] [21.8 dB] [-0.4 ppm]
static ACQUISITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[([0-9 :A-Z-]*)\] \[([0-9.]*)\] \[.*\] \[([0-9.]*) dB\].*$")
        .expect("acquisition pattern is valid")
});

// 4AC9E1 (Aircraft, Airborne) -> 11A0E5 (Ground station): Command
static ENDPOINTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-F0-9]+) \(([^,]*).*\) -> ([A-F0-9]+) \(([^,]*).*\): (.*)$")
        .expect("endpoint pattern is valid")
});

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d-%b-%Y %H:%M:%S",
    "%d %b %Y %H:%M:%S%.f",
    "%d %b %Y %H:%M",
    "%b %d %Y %H:%M:%S%.f",
    "%b %d %Y %H:%M",
    "%Y%m%d %H%M%S",
    "%Y%m%dT%H%M%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%b-%Y",
    "%d %b %Y",
    "%b %d %Y",
    "%Y%m%d",
];

/// Turn one record into a [`Message`].
///
/// Total over arbitrary input: anything that does not match degrades to an
/// unset field. For both the acquisition header and the endpoint line the
/// first usable line in the record wins.
pub fn parse_message(raw: Vec<String>) -> Message {
    let acquisition = raw.iter().find_map(|line| parse_acquisition(line));
    let (from, to) = raw
        .iter()
        .find_map(|line| parse_endpoints(line))
        .map_or((None, None), |(from, to)| (Some(from), Some(to)));

    Message::new(acquisition, from, to, raw)
}

fn parse_acquisition(line: &str) -> Option<Acquisition> {
    let caps = ACQUISITION.captures(line)?;

    Some(Acquisition {
        timestamp: parse_timestamp(&caps[1])?,
        frequency: caps[2].parse().ok()?,
        signal_level: caps[3].parse().ok()?,
    })
}

fn parse_endpoints(line: &str) -> Option<(Endpoint, Endpoint)> {
    let caps = ENDPOINTS.captures(line)?;

    let from = Endpoint {
        hex: HexAddress::from(&caps[1]),
        kind: caps[2].to_string(),
    };
    let to = Endpoint {
        hex: HexAddress::from(&caps[3]),
        kind: caps[4].to_string(),
    };

    Some((from, to))
}

/// Parse a header timestamp in any of the common human-readable layouts.
///
/// A trailing zone abbreviation (`UTC`, `CEST`, `Z`, ...) is dropped and the
/// wall-clock value is kept as logged.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = strip_zone(text.trim());
    if text.is_empty() {
        return None;
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

fn strip_zone(text: &str) -> &str {
    match text.strip_suffix('Z') {
        Some(stripped) if stripped.ends_with(|c: char| c.is_ascii_digit()) => return stripped,
        _ => {}
    }

    match text.rsplit_once(' ') {
        Some((head, zone)) if !zone.is_empty() && zone.chars().all(|c| c.is_ascii_uppercase()) => {
            head.trim_end()
        }
        _ => text,
    }
}
