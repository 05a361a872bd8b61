//! First-qualifying-point landfall detection

use tracing::{debug, info, trace};

use super::criteria::DetectionCriteria;
use super::stats::{DetectionResult, DetectionStats};
use crate::app::models::{LandfallEvent, StormTrack};
use crate::app::services::region::RegionBoundary;

/// Selects at most one landfall event per storm track
///
/// Each track is scanned in stored order and the first point satisfying the
/// [`DetectionCriteria`] becomes the storm's event. Later qualifying points are
/// ignored and a track with none produces nothing. Detection holds no state
/// between calls, so identical inputs always give identical output.
#[derive(Debug, Clone, Default)]
pub struct LandfallDetector {
    criteria: DetectionCriteria,
}

impl LandfallDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_criteria(criteria: DetectionCriteria) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &DetectionCriteria {
        &self.criteria
    }

    /// Landfall events for every track that has a qualifying point
    pub fn detect<R>(&self, tracks: &[StormTrack], region: &R) -> Vec<LandfallEvent>
    where
        R: RegionBoundary + ?Sized,
    {
        self.detect_with_stats(tracks, region).events
    }

    pub fn detect_with_stats<R>(&self, tracks: &[StormTrack], region: &R) -> DetectionResult
    where
        R: RegionBoundary + ?Sized,
    {
        let mut stats = DetectionStats::new();
        let mut events = Vec::new();

        for track in tracks {
            stats.storms_scanned += 1;

            if let Some(event) = self.first_landfall(track, region, &mut stats) {
                debug!(
                    "{} ({}) landfall at {} with {:?} kt",
                    event.storm_name, event.storm_id, event.timestamp, event.max_wind_kt
                );
                stats.storms_with_landfall += 1;
                events.push(event);
            } else {
                trace!("{} ({}) has no landfall", track.name, track.storm_id);
            }
        }

        info!(
            "Landfall detection in '{}': {}",
            region.name(),
            stats.summary()
        );

        DetectionResult { events, stats }
    }

    fn first_landfall<R>(
        &self,
        track: &StormTrack,
        region: &R,
        stats: &mut DetectionStats,
    ) -> Option<LandfallEvent>
    where
        R: RegionBoundary + ?Sized,
    {
        for (index, point) in track.points().iter().enumerate() {
            stats.points_scanned += 1;
            if self.criteria.qualifies(point, region) {
                stats.points_qualifying += 1;
                return Some(LandfallEvent::from_point(point, index));
            }
        }
        None
    }
}

/// Detect landfalls with the default hurricane criteria
pub fn detect<R>(tracks: &[StormTrack], region: &R) -> Vec<LandfallEvent>
where
    R: RegionBoundary + ?Sized,
{
    LandfallDetector::new().detect(tracks, region)
}
