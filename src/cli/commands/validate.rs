//! Validate command: parse the dataset and report what was found

use std::collections::BTreeMap;

use colored::*;
use serde::Serialize;
use tracing::{debug, info};

use super::shared::{build_source, fetch_dataset, load_configuration, setup_logging};
use crate::Result;
use crate::app::models::StormTrack;
use crate::app::services::hurdat_parser::{HurdatParser, ParseResult, ParseStats};
use crate::cli::args::{Commands, ValidateArgs};

const MAX_LISTED_ERRORS: usize = 10;

/// Parse statistics plus a per-basin breakdown
#[derive(Debug, Clone, Serialize)]
pub struct ValidationSummary {
    pub stats: ParseStats,
    pub storms: usize,
    pub track_points: usize,
    /// Storm count by basin code; unknown basins are grouped as "??"
    pub storms_by_basin: BTreeMap<String, usize>,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
}

impl ValidationSummary {
    pub fn from_result(result: &ParseResult) -> Self {
        let mut storms_by_basin = BTreeMap::new();
        for track in &result.tracks {
            let code = track.basin().map_or("??", |basin| basin.code());
            *storms_by_basin.entry(code.to_string()).or_insert(0) += 1;
        }

        let years = result.tracks.iter().filter_map(StormTrack::year);

        Self {
            stats: result.stats.clone(),
            storms: result.storm_count(),
            track_points: result.point_count(),
            storms_by_basin,
            first_year: years.clone().min(),
            last_year: years.max(),
        }
    }
}

/// Parse the dataset and print validation results
pub async fn run_validate(args: ValidateArgs) -> Result<()> {
    let show_progress = args.logging.show_progress();
    let refresh = args.source.refresh;
    let json = args.json;
    let command = Commands::Validate(args);

    let config = load_configuration(&command)?;
    setup_logging(&config.logging.level, command.logging())?;
    debug!("Effective configuration: {:?}", config);

    let source = build_source(&config, refresh)?;
    let text = fetch_dataset(source.as_ref(), show_progress).await?;

    let result = HurdatParser::with_mode(config.detection.parse_mode).parse(&text)?;
    info!("{}", result.stats.summary());

    let summary = ValidationSummary::from_result(&result);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(())
}

fn print_summary(summary: &ValidationSummary) {
    let stats = &summary.stats;

    println!("\n{}", "HURDAT2 Validation".bright_green().bold());
    println!("{}", "━".repeat(40));
    println!("   • Lines read: {}", stats.lines_read);
    println!(
        "   • Storms: {}",
        summary.storms.to_string().bright_white().bold()
    );
    println!("   • Track points: {}", summary.track_points);
    if let (Some(first), Some(last)) = (summary.first_year, summary.last_year) {
        println!("   • Seasons: {}-{}", first, last);
    }
    for (basin, count) in &summary.storms_by_basin {
        println!("   • Basin {}: {} storms", basin, count);
    }

    if stats.is_clean() {
        println!("\n{}", "✓ No anomalies found".bright_green());
        return;
    }

    if stats.entry_count_mismatches > 0 {
        println!(
            "   {} Header counts not matching observations: {}",
            "⚠".yellow(),
            stats.entry_count_mismatches
        );
    }
    if stats.out_of_order_points > 0 {
        println!(
            "   {} Out-of-order observations: {}",
            "⚠".yellow(),
            stats.out_of_order_points
        );
    }
    if stats.lines_skipped > 0 {
        println!(
            "   {} Skipped lines: {}",
            "✗".bright_red().bold(),
            stats.lines_skipped
        );
        for message in stats.errors.iter().take(MAX_LISTED_ERRORS) {
            println!("      {}", message);
        }
        if stats.errors.len() > MAX_LISTED_ERRORS {
            println!("      ... and {} more", stats.errors.len() - MAX_LISTED_ERRORS);
        }
    }
}
