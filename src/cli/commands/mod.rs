//! Command implementations for the landfall reporter CLI
//!
//! - `report`: full pipeline with table, CSV or JSON output
//! - `validate`: parse-only dataset check

pub mod report;
pub mod shared;
pub mod validate;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch to the subcommand handler
///
/// `main` prints help before calling this when no subcommand is given.
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Report(report_args)) => report::run_report(report_args).await,
        Some(Commands::Validate(validate_args)) => validate::run_validate(validate_args).await,
        None => Ok(()),
    }
}
