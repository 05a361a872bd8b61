//! Qualification rule for a landfall point

use serde::{Deserialize, Serialize};

use crate::app::models::{StormStatus, TrackPoint};
use crate::app::services::region::RegionBoundary;

/// What a track point needs to count as a landfall
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionCriteria {
    /// Status code the storm must carry at the point (hurricane by default)
    pub qualifying_status: StormStatus,
}

impl Default for DetectionCriteria {
    fn default() -> Self {
        Self {
            qualifying_status: StormStatus::Hurricane,
        }
    }
}

impl DetectionCriteria {
    pub fn new(qualifying_status: StormStatus) -> Self {
        Self { qualifying_status }
    }

    /// True if the point has the qualifying status and lies inside the region
    ///
    /// The status is checked first so the geometry test only runs for
    /// candidate points.
    pub fn qualifies<R>(&self, point: &TrackPoint, region: &R) -> bool
    where
        R: RegionBoundary + ?Sized,
    {
        point.status == self.qualifying_status && region.contains(point.latitude, point.longitude)
    }
}
