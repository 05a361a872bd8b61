//! Command-line argument definitions for the landfall reporter
//!
//! This module defines the CLI using the clap derive API. Every flag is
//! optional; anything left unset falls back to the config file, the
//! environment, or the built-in defaults.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::app::services::report::{DedupPolicy, OutputFormat};

/// CLI arguments for the HURDAT2 landfall reporter
///
/// Finds hurricanes that made landfall in a region using only track
/// positions and intensity from the NOAA HURDAT2 best-track dataset.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hurdat-landfall",
    version,
    about = "Report hurricanes that made landfall in a region from NOAA HURDAT2 best-track data",
    long_about = "Parses the NOAA HURDAT2 best-track dataset and reports every storm whose track \
                  reached hurricane status inside a region boundary (GeoJSON or shapefile). The \
                  first qualifying observation of each storm is reported with its time and maximum \
                  sustained wind. The dataset's own landfall markers are not used."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Detect landfalls and print the report
    Report(ReportArgs),
    /// Parse the dataset only and print parse statistics
    Validate(ValidateArgs),
}

/// Dataset location and parsing flags shared by all commands
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct SourceArgs {
    /// Local HURDAT2 file (skips the download)
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Dataset URL to download when no input file is given
    #[arg(long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Download again even if a cached copy exists
    #[arg(long = "refresh")]
    pub refresh: bool,

    /// Do not read or write the download cache
    #[arg(long = "no-cache", conflicts_with = "refresh")]
    pub no_cache: bool,

    /// Skip malformed lines instead of failing
    #[arg(long = "lenient")]
    pub lenient: bool,

    /// Configuration file (defaults to <config dir>/hurdat-landfall/config.toml)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Verbosity flags shared by all commands
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct LoggingArgs {
    /// Increase logging verbosity (-v: debug, -vv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only show warnings and errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl LoggingArgs {
    /// Effective log level, falling back to `default` when no flag is given
    pub fn get_log_level(&self, default: &str) -> String {
        if self.quiet {
            "warn".to_string()
        } else {
            match self.verbose {
                0 => default.to_string(),
                1 => "debug".to_string(),
                _ => "trace".to_string(),
            }
        }
    }

    /// Spinners and summaries are hidden in quiet mode
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Arguments for the report command
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct ReportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Region boundary file (.geojson, .json or .shp)
    #[arg(short = 'b', long = "boundary", value_name = "PATH")]
    pub boundary: Option<PathBuf>,

    /// Region to select from the boundary file
    #[arg(short = 'r', long = "region", value_name = "NAME")]
    pub region: Option<String>,

    /// Use every polygon in the boundary file instead of one named region
    #[arg(long = "all-features", conflicts_with = "region")]
    pub all_features: bool,

    /// Attribute holding region names in the boundary file
    #[arg(long = "name-field", value_name = "FIELD")]
    pub name_field: Option<String>,

    /// Status code a point must carry to count as landfall
    #[arg(long = "status", value_name = "CODE")]
    pub status: Option<String>,

    /// How duplicate storms are collapsed
    #[arg(long = "dedup-by", value_enum)]
    pub dedup_by: Option<DedupPolicy>,

    /// Report format
    #[arg(short = 'f', long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Disable coloured table output
    #[arg(long = "no-color")]
    pub no_color: bool,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print parse statistics as JSON
    #[arg(long = "json")]
    pub json: bool,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

impl Commands {
    pub fn logging(&self) -> &LoggingArgs {
        match self {
            Self::Report(args) => &args.logging,
            Self::Validate(args) => &args.logging,
        }
    }

    pub fn source(&self) -> &SourceArgs {
        match self {
            Self::Report(args) => &args.source,
            Self::Validate(args) => &args.source,
        }
    }
}
