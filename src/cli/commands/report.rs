//! Report command: fetch, detect and print landfalls

use std::fs::File;
use std::io::{BufWriter, IsTerminal, Write};
use std::time::Instant;

use colored::*;
use tracing::{debug, info};

use super::shared::{build_source, fetch_dataset, load_configuration, setup_logging};
use crate::app::services::pipeline::{LandfallPipeline, PipelineOutput};
use crate::app::services::region::load_region;
use crate::app::services::report::render;
use crate::cli::args::{Commands, ReportArgs};
use crate::config::Config;
use crate::{Error, Result};

/// Run the full landfall pipeline and write the report
pub async fn run_report(args: ReportArgs) -> Result<()> {
    let start_time = Instant::now();
    let show_progress = args.logging.show_progress();
    let refresh = args.source.refresh;
    let command = Commands::Report(args);

    let config = load_configuration(&command)?;
    setup_logging(&config.logging.level, command.logging())?;
    debug!("Effective configuration: {:?}", config);

    // Fail on a bad boundary before spending time on the download
    let boundary_path = config.boundary_path()?;
    let region = load_region(
        boundary_path,
        config.region.name.as_deref(),
        &config.region.name_field,
    )?;

    let source = build_source(&config, refresh)?;
    let text = fetch_dataset(source.as_ref(), show_progress).await?;

    let output = LandfallPipeline::new(config.pipeline_options()).run(&text, &region)?;

    write_report(&config, &output)?;

    if show_progress {
        print_summary(&output, start_time);
    }
    info!("Report completed in {:.2?}", start_time.elapsed());

    Ok(())
}

fn write_report(config: &Config, output: &PipelineOutput) -> Result<()> {
    match &config.report.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                Error::io(format!("Failed to create report file {}", path.display()), e)
            })?;
            let mut writer = BufWriter::new(file);
            render(&output.report, config.report.format, false, &mut writer)?;
            writer.flush()?;
            info!("Report written to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let color = config.report.color && stdout.is_terminal();
            let mut handle = stdout.lock();
            render(&output.report, config.report.format, color, &mut handle)?;
            handle.flush()?;
        }
    }
    Ok(())
}

fn print_summary(output: &PipelineOutput, start_time: Instant) {
    let report = &output.report;

    eprintln!();
    eprintln!(
        "{} {} landfall(s) in {} from {} storms",
        "✓".bright_green().bold(),
        report.len().to_string().bright_white().bold(),
        report.region.bright_cyan(),
        output.storm_count
    );
    if report.duplicates_removed > 0 {
        eprintln!(
            "  {} duplicate(s) removed by {:?} policy",
            report.duplicates_removed, report.dedup_policy
        );
    }
    if let Some(strongest) = report.strongest() {
        eprintln!(
            "  Strongest: {} ({} kt on {})",
            strongest.name.bold(),
            strongest.max_wind_kt.unwrap_or_default(),
            strongest.timestamp.format("%Y-%m-%d")
        );
    }
    if output.parse_stats.lines_skipped > 0 {
        eprintln!(
            "  {} {} malformed line(s) skipped",
            "⚠".yellow(),
            output.parse_stats.lines_skipped
        );
    }
    eprintln!("  Finished in {:.2?}", start_time.elapsed());
}
