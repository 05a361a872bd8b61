//! Tests for table, CSV and JSON rendering

use super::*;
use crate::app::models::ReportRow;
use crate::app::services::report::{
    DedupPolicy, LandfallReport, OutputFormat, render, render_to_string,
};

fn sample_report() -> LandfallReport {
    let events = vec![
        event("AL022000", "BETA", 2, 95),
        event("AL112000", "GORDON, JR", 18, 65),
    ];
    LandfallReport::from_events("Florida", &events, DedupPolicy::StormName)
}

#[test]
fn test_table_output() {
    let output = render_to_string(&sample_report(), OutputFormat::Table).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Name"));
    assert!(lines[0].contains("Max Wind (kt)"));
    assert!(lines[2].starts_with("BETA"));
    assert!(lines[2].contains("AL022000"));
    assert!(lines[2].contains("2000-09-02 12:00"));
    assert!(lines[2].trim_end().ends_with("95"));
    assert_eq!(lines[2].len(), lines[3].len());
}

#[test]
fn test_table_for_empty_report_has_header_only() {
    let report = LandfallReport::from_events("Florida", &[], DedupPolicy::StormName);
    let output = render_to_string(&report, OutputFormat::Table).unwrap();

    assert_eq!(output.lines().count(), 2);
}

#[test]
fn test_csv_output_quotes_and_header() {
    let output = render_to_string(&sample_report(), OutputFormat::Csv).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "name,storm_id,timestamp,max_wind_kt");
    assert_eq!(lines[1], "BETA,AL022000,2000-09-02T12:00:00Z,95");
    assert!(lines[2].starts_with("\"GORDON, JR\""));
}

#[test]
fn test_csv_for_empty_report_has_header_only() {
    let report = LandfallReport::from_events("Florida", &[], DedupPolicy::StormName);
    let output = render_to_string(&report, OutputFormat::Csv).unwrap();

    assert_eq!(output, "name,storm_id,timestamp,max_wind_kt\n");
}

#[test]
fn test_table_widths_count_characters() {
    let events = vec![event("AL151979", "JOSÉ", 2, 80)];
    let report = LandfallReport::from_events("Florida", &events, DedupPolicy::StormName);
    let output = render_to_string(&report, OutputFormat::Table).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[0].starts_with("Name  Storm ID"));
    assert!(lines[2].starts_with("JOSÉ  AL151979"));
    assert_eq!(lines[0].chars().count(), lines[2].chars().count());
}

#[test]
fn test_json_output_parses_back() {
    let output = render_to_string(&sample_report(), OutputFormat::Json).unwrap();
    let rows: Vec<ReportRow> = serde_json::from_str(&output).unwrap();

    assert_eq!(rows, sample_report().rows);
}

#[test]
fn test_colored_table_still_contains_rows() {
    let mut buffer = Vec::new();
    render(&sample_report(), OutputFormat::Table, true, &mut buffer).unwrap();
    let output = String::from_utf8(buffer).unwrap();

    assert!(output.contains("BETA"));
    assert!(output.contains("Storm ID"));
}
