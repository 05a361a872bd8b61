//! Core HURDAT2 parser implementation
//!
//! A single forward pass over the text. Each header line opens a
//! [`StormTrackBuilder`]; observation lines are appended to the open builder,
//! which is finalized into an immutable [`StormTrack`] when the next header
//! arrives or the input ends.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::field_parsers::LineContext;
use super::header::StormHeader;
use super::record_parser::parse_observation_record;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{StormTrack, TrackPoint};
use crate::{Error, Result};

/// How malformed lines are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Any malformed line aborts the parse and no tracks are returned
    #[default]
    Strict,

    /// Malformed lines are logged, counted and skipped
    Lenient,
}

/// Accumulates the observations of the storm currently being read
#[derive(Debug)]
pub struct StormTrackBuilder {
    header: StormHeader,
    points: Vec<TrackPoint>,
}

impl StormTrackBuilder {
    pub fn new(header: StormHeader) -> Self {
        let points = Vec::with_capacity(header.expected_entries.unwrap_or_default());
        Self { header, points }
    }

    pub fn header(&self) -> &StormHeader {
        &self.header
    }

    /// Append a point, noting (not correcting) any step back in time
    pub fn push(&mut self, point: TrackPoint, stats: &mut ParseStats) {
        if let Some(last) = self.points.last() {
            if point.timestamp < last.timestamp {
                warn!(
                    "Storm {} has out-of-order observation at {} (previous {})",
                    self.header.storm_id, point.timestamp, last.timestamp
                );
                stats.out_of_order_points += 1;
            }
        }
        self.points.push(point);
    }

    /// Close the storm and hand back its immutable track
    pub fn finish(self, stats: &mut ParseStats) -> StormTrack {
        if let Some(expected) = self.header.expected_entries {
            if expected != self.points.len() {
                warn!(
                    "Storm {} ({}) header announces {} entries but {} were read",
                    self.header.storm_id,
                    self.header.name,
                    expected,
                    self.points.len()
                );
                stats.entry_count_mismatches += 1;
            }
        }

        debug!(
            "Finished storm {} ({}) with {} points",
            self.header.storm_id,
            self.header.name,
            self.points.len()
        );

        StormTrack::new(self.header.storm_id, self.header.name, self.points)
    }
}

/// Parser for HURDAT2 best-track text
#[derive(Debug, Clone, Default)]
pub struct HurdatParser {
    mode: ParseMode,
}

impl HurdatParser {
    /// Create a strict parser
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: ParseMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parse the full text of a HURDAT2 file into storm tracks
    pub fn parse(&self, raw_text: &str) -> Result<ParseResult> {
        let raw_text = raw_text.strip_prefix('\u{feff}').unwrap_or(raw_text);

        let mut stats = ParseStats::new();
        let mut tracks = Vec::new();
        let mut current: Option<StormTrackBuilder> = None;

        for (index, raw_line) in raw_text.lines().enumerate() {
            stats.lines_read += 1;
            let ctx = LineContext::new(index + 1, raw_line.trim_end());

            if ctx.text.trim().is_empty() {
                stats.blank_lines += 1;
                continue;
            }

            if StormHeader::is_header_line(ctx.text) {
                if let Some(builder) = current.take() {
                    tracks.push(builder.finish(&mut stats));
                }

                match StormHeader::parse(&ctx) {
                    Ok(header) => {
                        stats.headers += 1;
                        current = Some(StormTrackBuilder::new(header));
                    }
                    // Observations under a rejected header become orphans
                    Err(error) => self.handle_malformed(error, &mut stats)?,
                }
                continue;
            }

            let Some(builder) = current.as_mut() else {
                let error = ctx.error("observation line appears before any storm header");
                self.handle_malformed(error, &mut stats)?;
                continue;
            };

            match parse_observation_record(&ctx, builder.header()) {
                Ok(point) => {
                    builder.push(point, &mut stats);
                    stats.observations += 1;
                }
                Err(error) => self.handle_malformed(error, &mut stats)?,
            }
        }

        if let Some(builder) = current.take() {
            tracks.push(builder.finish(&mut stats));
        }

        info!(
            "Parsed {} storms with {} observations ({} lines skipped)",
            tracks.len(),
            stats.observations,
            stats.lines_skipped
        );

        Ok(ParseResult { tracks, stats })
    }

    fn handle_malformed(&self, error: Error, stats: &mut ParseStats) -> Result<()> {
        match self.mode {
            ParseMode::Strict => Err(error),
            ParseMode::Lenient => {
                warn!("Skipping malformed line: {}", error);
                stats.record_skipped(error.to_string());
                Ok(())
            }
        }
    }
}

/// Parse HURDAT2 text strictly, returning only the storm tracks
pub fn parse(raw_text: &str) -> Result<Vec<StormTrack>> {
    HurdatParser::new().parse(raw_text).map(|result| result.tracks)
}
