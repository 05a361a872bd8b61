//! Report rendering as an aligned table, CSV or JSON

use std::io::Write;

use clap::ValueEnum;
use colored::*;
use serde::{Deserialize, Serialize};

use super::landfall_report::LandfallReport;
use crate::Result;
use crate::app::models::ReportRow;

const TIMESTAMP_DISPLAY: &str = "%Y-%m-%d %H:%M";

const CSV_HEADER: [&str; 4] = ["name", "storm_id", "timestamp", "max_wind_kt"];

/// Output format for the landfall report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned, human-readable table
    #[default]
    Table,
    /// Comma-separated values with a header row
    Csv,
    /// Pretty-printed JSON array
    Json,
}

/// Write the report in the requested format
///
/// `color` only affects the table header; CSV and JSON are never coloured.
pub fn render<W: Write>(
    report: &LandfallReport,
    format: OutputFormat,
    color: bool,
    writer: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Table => render_table(&report.rows, color, writer),
        OutputFormat::Csv => render_csv(&report.rows, writer),
        OutputFormat::Json => render_json(&report.rows, writer),
    }
}

/// Render into a string, mostly for tests and small reports
pub fn render_to_string(report: &LandfallReport, format: OutputFormat) -> Result<String> {
    let mut buffer = Vec::new();
    render(report, format, false, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| crate::Error::report(e.to_string()))
}

fn render_table<W: Write>(rows: &[ReportRow], color: bool, writer: &mut W) -> Result<()> {
    let headers = ["Name", "Storm ID", "Landfall (UTC)", "Max Wind (kt)"];

    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.name.clone(),
                row.storm_id.to_string(),
                row.timestamp.format(TIMESTAMP_DISPLAY).to_string(),
                row.max_wind_kt
                    .map_or_else(|| "-".to_string(), |wind| wind.to_string()),
            ]
        })
        .collect();

    // Width in characters; `{:<w$}` pads by chars, not bytes
    let mut widths = headers.map(|header| header.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header_line = format!(
        "{:<w0$}  {:<w1$}  {:<w2$}  {:>w3$}",
        headers[0],
        headers[1],
        headers[2],
        headers[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    );
    if color {
        writeln!(writer, "{}", header_line.bright_green().bold())?;
    } else {
        writeln!(writer, "{}", header_line)?;
    }

    let rule_len = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    writeln!(writer, "{}", "─".repeat(rule_len))?;

    for row in &cells {
        writeln!(
            writer,
            "{:<w0$}  {:<w1$}  {:<w2$}  {:>w3$}",
            row[0],
            row[1],
            row[2],
            row[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        )?;
    }

    Ok(())
}

fn render_csv<W: Write>(rows: &[ReportRow], writer: &mut W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    // The header is only emitted by the first serialize call
    if rows.is_empty() {
        csv_writer.write_record(CSV_HEADER)?;
    }
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn render_json<W: Write>(rows: &[ReportRow], writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, rows)?;
    writeln!(writer)?;
    Ok(())
}
