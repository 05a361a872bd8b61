use anyhow::{Context, Result};
use clap::Parser;
use hurdat_landfall::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    if let Err(error) = run(args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("failed to create async runtime")?;

    runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => Ok(result?),
            signal = tokio::signal::ctrl_c() => {
                signal.context("failed to listen for CTRL+C")?;
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(hurdat_landfall::Error::processing_interrupted("Interrupted by user").into())
            }
        }
    })
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("HURDAT2 Landfall Reporter");
    println!("=========================");
    println!();
    println!("Report hurricanes that made landfall in a region, inferred from the");
    println!("position and intensity of NOAA HURDAT2 best-track observations.");
    println!();
    println!("USAGE:");
    println!("    hurdat-landfall <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    report      Detect landfalls and print the report");
    println!("    validate    Parse the dataset and print parse statistics");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Florida landfalls from the default dataset:");
    println!("    hurdat-landfall report --boundary usa-states-census-2014.shp");
    println!();
    println!("    # Another state from a local file, as CSV:");
    println!("    hurdat-landfall report -i hurdat2.txt -b states.geojson -r Texas -f csv");
    println!();
    println!("    # Check a dataset file for malformed lines:");
    println!("    hurdat-landfall validate -i hurdat2.txt --lenient");
    println!();
    println!("For detailed help on any command, use:");
    println!("    hurdat-landfall <COMMAND> --help");
}
