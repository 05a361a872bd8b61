//! Fixtures for landfall detection tests
//!
//! Tracks are built directly rather than parsed so each test controls the
//! exact status and position sequence.


use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::app::models::{RecordIdentifier, StormId, StormStatus, StormTrack, TrackPoint};
use crate::app::services::region::BoundingBox;

/// Region covering lat 24..31, lon -88..-80 (roughly the Florida peninsula)
pub fn florida_box() -> BoundingBox {
    BoundingBox::new("Florida", 24.0, 31.0, -88.0, -80.0).unwrap()
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1992, 8, 23, 0, 0, 0).unwrap()
}

/// Build a track from (status, lat, lon, wind) tuples six hours apart
pub fn track(id: &str, name: &str, points: &[(StormStatus, f64, f64, u16)]) -> StormTrack {
    let storm_id = StormId::new(id);
    let points = points
        .iter()
        .enumerate()
        .map(|(i, (status, lat, lon, wind))| TrackPoint {
            storm_id: storm_id.clone(),
            storm_name: name.to_string(),
            timestamp: start_time() + Duration::hours(6 * i as i64),
            record_identifier: RecordIdentifier::Standard,
            status: status.clone(),
            latitude: *lat,
            longitude: *lon,
            max_wind_kt: Some(*wind),
        })
        .collect();

    StormTrack::new(storm_id, name.to_string(), points)
}
