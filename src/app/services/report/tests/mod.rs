//! Fixtures for report assembly and rendering tests

mod render_tests;

use chrono::{TimeZone, Utc};

use crate::app::models::{LandfallEvent, StormId};

/// Landfall event at 2000-09-01 + `day` days, 12:00 UTC
pub fn event(id: &str, name: &str, day: u32, wind: u16) -> LandfallEvent {
    LandfallEvent {
        storm_id: StormId::new(id),
        storm_name: name.to_string(),
        timestamp: Utc.with_ymd_and_hms(2000, 9, day, 12, 0, 0).unwrap(),
        max_wind_kt: Some(wind),
        latitude: 27.0,
        longitude: -82.0,
        point_index: 0,
    }
}
