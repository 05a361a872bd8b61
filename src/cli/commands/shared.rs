//! Shared components for CLI commands
//!
//! Logging setup, layered configuration loading and dataset fetching used by
//! every subcommand.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::app::adapters::source::{CachedSource, DatasetSource, FileSource, HttpSource};
use crate::app::models::StormStatus;
use crate::app::services::hurdat_parser::ParseMode;
use crate::cli::args::{Commands, LoggingArgs, SourceArgs};
use crate::config::Config;
use crate::constants::LOG_TARGET;
use crate::{Error, Result};

/// Set up structured logging on stderr
///
/// `RUST_LOG` wins over the configured level when it is set.
pub fn setup_logging(level: &str, logging: &LoggingArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, level)));

    let result = if logging.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;

    debug!("Logging initialized at level: {}", level);
    Ok(())
}

/// Load configuration using the layered approach (defaults -> file -> env -> args)
pub fn load_configuration(command: &Commands) -> Result<Config> {
    let mut config = Config::load_layered(command.source().config.as_deref())?;
    apply_cli_overrides(&mut config, command);
    config.validate()?;
    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, command: &Commands) {
    apply_source_overrides(config, command.source());

    config.logging.level = command.logging().get_log_level(&config.logging.level);

    if let Commands::Report(args) = command {
        if let Some(boundary) = &args.boundary {
            config.region.boundary = Some(boundary.clone());
        }
        if let Some(region) = &args.region {
            config.region.name = Some(region.clone());
        }
        if args.all_features {
            config.region.name = None;
        }
        if let Some(name_field) = &args.name_field {
            config.region.name_field = name_field.clone();
        }
        if let Some(status) = &args.status {
            let Ok(status) = status.parse::<StormStatus>();
            config.detection.qualifying_status = status;
        }
        if let Some(dedup) = args.dedup_by {
            config.detection.dedup = dedup;
        }
        if let Some(format) = args.format {
            config.report.format = format;
        }
        if let Some(output) = &args.output {
            config.report.output = Some(output.clone());
        }
        if args.no_color {
            config.report.color = false;
        }
    }
}

fn apply_source_overrides(config: &mut Config, source: &SourceArgs) {
    if let Some(input) = &source.input {
        config.source.input = Some(input.clone());
    }
    if let Some(url) = &source.url {
        config.source.url = url.clone();
        // An explicit URL means download, even if a file is configured
        if source.input.is_none() {
            config.source.input = None;
        }
    }
    if source.no_cache {
        config.source.use_cache = false;
    }
    if source.lenient {
        config.detection.parse_mode = ParseMode::Lenient;
    }
}

/// Pick the dataset source the configuration asks for
pub fn build_source(config: &Config, refresh: bool) -> Result<Box<dyn DatasetSource>> {
    if let Some(input) = &config.source.input {
        return Ok(Box::new(FileSource::new(input)));
    }

    let http = HttpSource::new(&config.source.url)?;
    if config.source.use_cache {
        Ok(Box::new(CachedSource::new(http, refresh)?))
    } else {
        Ok(Box::new(http))
    }
}

/// Fetch the dataset text, showing a spinner unless quiet
pub async fn fetch_dataset(source: &dyn DatasetSource, show_progress: bool) -> Result<String> {
    info!("Loading dataset from {}", source.describe());

    let spinner = if show_progress {
        Some(create_spinner(format!("Loading {}", source.describe()))?)
    } else {
        None
    };

    let result = source.fetch().await;

    if let Some(spinner) = spinner {
        match &result {
            Ok(text) => spinner.finish_with_message(format!(
                "Loaded dataset ({} lines)",
                text.lines().count()
            )),
            Err(_) => spinner.finish_and_clear(),
        }
    }

    result
}

/// Steady-ticking spinner on stderr
pub fn create_spinner(message: String) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] {msg}")
        .map_err(|e| Error::configuration(format!("Invalid progress template: {}", e)))?;
    spinner.set_style(style);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}
