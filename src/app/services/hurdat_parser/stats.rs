//! Parsing statistics and result structures for HURDAT2 processing
//!
//! This module provides types for tracking what a parse pass saw and
//! organizing the parsed storm tracks for detection.

use crate::app::models::StormTrack;

/// Parsing result with storm tracks and statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Storm tracks in order of first appearance
    pub tracks: Vec<StormTrack>,

    pub stats: ParseStats,
}

impl ParseResult {
    pub fn storm_count(&self) -> usize {
        self.tracks.len()
    }

    /// Total track points across all storms
    pub fn point_count(&self) -> usize {
        self.tracks.iter().map(StormTrack::len).sum()
    }
}

/// Counters collected during one parse pass
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Lines read, including blank ones
    pub lines_read: usize,

    pub blank_lines: usize,

    /// Storm header lines accepted
    pub headers: usize,

    /// Observation lines turned into track points
    pub observations: usize,

    /// Lines skipped in lenient mode
    pub lines_skipped: usize,

    /// Observations whose timestamp precedes the previous one in the same storm
    pub out_of_order_points: usize,

    /// Storms whose header count differs from the observations found
    pub entry_count_mismatches: usize,

    /// Messages for skipped lines
    pub errors: Vec<String>,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a line skipped in lenient mode
    pub fn record_skipped(&mut self, message: String) {
        self.lines_skipped += 1;
        self.errors.push(message);
    }

    /// True when nothing was skipped and no anomalies were seen
    pub fn is_clean(&self) -> bool {
        self.lines_skipped == 0 && self.out_of_order_points == 0 && self.entry_count_mismatches == 0
    }

    pub fn summary(&self) -> String {
        format!(
            "{} lines, {} storms, {} observations, {} skipped",
            self.lines_read, self.headers, self.observations, self.lines_skipped
        )
    }
}
