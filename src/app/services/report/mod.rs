//! Landfall report assembly and rendering
//!
//! - [`assembler`] - Deduplication of landfall events into report rows
//! - [`landfall_report`] - The report value handed to renderers
//! - [`render`] - Table, CSV and JSON output

pub mod assembler;
pub mod landfall_report;
pub mod render;

#[cfg(test)]
pub mod tests;

pub use assembler::{DedupPolicy, assemble};
pub use landfall_report::LandfallReport;
pub use render::{OutputFormat, render, render_to_string};
