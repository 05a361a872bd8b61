//! HURDAT2 parser for best-track cyclone data
//!
//! This module turns the line-oriented HURDAT2 text format into typed storm
//! tracks. Each storm block is a header line followed by its observation lines:
//!
//! ```text
//! AL092004,            IVAN,    94,
//! 20040916, 0650, L, HU, 30.2N,  87.9W, 105,  946, ...
//! ```
//!
//! ## Architecture
//!
//! - [`parser`] - Single-pass orchestration with an explicit per-storm builder
//! - [`header`] - Storm header line recognition and extraction
//! - [`record_parser`] - Observation line to [`TrackPoint`](crate::TrackPoint)
//! - [`field_parsers`] - Timestamp, wind and position field helpers
//! - [`coordinates`] - Hemisphere-suffixed coordinate decoding
//! - [`stats`] - Parse statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use hurdat_landfall::app::services::hurdat_parser::{HurdatParser, ParseMode};
//!
//! # fn example(text: &str) -> hurdat_landfall::Result<()> {
//! let result = HurdatParser::with_mode(ParseMode::Strict).parse(text)?;
//! println!("Parsed {} storms", result.storm_count());
//! # Ok(())
//! # }
//! ```

pub mod coordinates;
pub mod field_parsers;
pub mod header;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use coordinates::{parse_coordinate, parse_latitude, parse_longitude};
pub use header::StormHeader;
pub use parser::{HurdatParser, ParseMode, StormTrackBuilder, parse};
pub use stats::{ParseResult, ParseStats};
