use collate_core::cli::scan::scan_file;
use collate_core::cli::watch::render_hex;
use collate_core::index::Direction;
use integration_tests::harness::fixture_path;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

#[test]
fn scan_indexes_only_records_with_endpoints() {
    // Arrange
    let path = fixture_path("dumpvdl2.log");

    // Act
    let index = scan_file(&path).expect("scan failed");

    // Assert
    assert_eq!(index.total_message_count(), 2);
    assert_eq!(index.hex_count(), 2);
    assert_eq!(
        index.type_counts(Direction::From),
        BTreeMap::from([
            ("Aircraft".to_string(), 1),
            ("Ground station".to_string(), 1)
        ])
    );
}

#[test]
fn scanned_hex_lists_newest_first_with_full_record() {
    // Arrange
    let index = scan_file(&fixture_path("dumpvdl2.log")).expect("scan failed");

    // Act
    let messages = index.messages_for_hex("4AC9E1");

    // Assert
    let times: Vec<String> = messages
        .iter()
        .map(|m| m.timestamp().map(|t| t.to_string()).unwrap_or_default())
        .collect();
    assert_eq!(times, vec!["2021-08-01 12:30:05", "2021-08-01 12:30:00"]);

    let command = &messages[1];
    assert_eq!(command.frequency(), Some(136.975));
    assert_eq!(command.signal_level(), Some(21.8));
    assert_eq!(command.raw().len(), 8);
    assert_eq!(command.raw()[7], " #DFB/PER/12345");
}

#[test]
fn hex_view_reports_totals() {
    // Arrange
    let index = scan_file(&fixture_path("dumpvdl2.log")).expect("scan failed");

    // Act
    let out = render_hex(&index.hex_detail("11A0E5", 1));

    // Assert
    assert!(out.starts_with("Hex 11A0E5\n"));
    assert!(out.contains("showing 1 of 2 messages"));
    assert!(out.contains("11A0E5 (Ground station) -> 4AC9E1 (Aircraft)"));
}

#[test]
fn scan_of_missing_file_fails() {
    // Act
    let result = scan_file(&fixture_path("absent.log"));

    // Assert
    assert!(result.is_err());
}
