//! Detection statistics and result structures

use serde::Serialize;

use crate::app::models::LandfallEvent;

/// Counters collected during one detection run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetectionStats {
    pub storms_scanned: usize,
    /// Points examined, stopping at each storm's first qualifying point
    pub points_scanned: usize,
    pub points_qualifying: usize,
    pub storms_with_landfall: usize,
}

impl DetectionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of scanned storms that produced an event, as a percentage
    pub fn landfall_rate(&self) -> f64 {
        if self.storms_scanned == 0 {
            0.0
        } else {
            (self.storms_with_landfall as f64 / self.storms_scanned as f64) * 100.0
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Scanned {} storms ({} points): {} landfall(s), {:.1}%",
            self.storms_scanned,
            self.points_scanned,
            self.storms_with_landfall,
            self.landfall_rate()
        )
    }
}

/// Events found by a detection run, in storm order
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    pub events: Vec<LandfallEvent>,
    pub stats: DetectionStats,
}

impl DetectionResult {
    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}
