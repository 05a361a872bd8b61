//! Data models for HURDAT2 track processing
//!
//! This module contains the core data structures for representing storm tracks,
//! their individual best-track observations and the landfall events selected from them.

use crate::constants::{self, basins, record_identifiers, status_codes};
use chrono::{DateTime, Datelike, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;
use std::sync::LazyLock;

static STORM_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(constants::STORM_ID_PATTERN).expect("storm id pattern is a valid regex")
});

// =============================================================================
// Basin and Storm Identity
// =============================================================================

/// Ocean basin a storm was tracked in, taken from the identifier prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Basin {
    Atlantic,
    NortheastPacific,
    NorthCentralPacific,
}

impl Basin {
    /// Look up a basin from its two-letter code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            basins::ATLANTIC => Some(Basin::Atlantic),
            basins::NORTHEAST_PACIFIC => Some(Basin::NortheastPacific),
            basins::NORTH_CENTRAL_PACIFIC => Some(Basin::NorthCentralPacific),
            _ => None,
        }
    }

    /// Match the basin prefix at the start of a line, if any
    pub fn from_line_prefix(line: &str) -> Option<Self> {
        line.trim_start().get(..2).and_then(Self::from_code)
    }

    /// Two-letter code used in HURDAT2 identifiers
    pub fn code(&self) -> &'static str {
        match self {
            Basin::Atlantic => basins::ATLANTIC,
            Basin::NortheastPacific => basins::NORTHEAST_PACIFIC,
            Basin::NorthCentralPacific => basins::NORTH_CENTRAL_PACIFIC,
        }
    }
}

impl std::fmt::Display for Basin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Opaque storm identifier such as `AL092004`
///
/// The identifier is stable for the lifetime of the dataset. Basin, cyclone
/// number and year are only available when it has the canonical `BBNNYYYY` shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StormId(String);

impl StormId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn basin(&self) -> Option<Basin> {
        Basin::from_line_prefix(&self.0)
    }

    /// Cyclone number within its season
    pub fn cyclone_number(&self) -> Option<u8> {
        STORM_ID_REGEX
            .captures(&self.0)
            .and_then(|caps| caps["number"].parse().ok())
    }

    /// Season year
    pub fn year(&self) -> Option<i32> {
        STORM_ID_REGEX
            .captures(&self.0)
            .and_then(|caps| caps["year"].parse().ok())
    }
}

impl std::fmt::Display for StormId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Observation Codes
// =============================================================================

/// System status at an observation (tropical depression, hurricane, ...)
///
/// Unknown codes are kept verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StormStatus {
    TropicalDepression,
    TropicalStorm,
    Hurricane,
    Extratropical,
    SubtropicalDepression,
    SubtropicalStorm,
    Low,
    TropicalWave,
    Disturbance,
    Other(String),
}

impl StormStatus {
    /// Two-letter code as written in the dataset
    pub fn code(&self) -> &str {
        match self {
            StormStatus::TropicalDepression => status_codes::TROPICAL_DEPRESSION,
            StormStatus::TropicalStorm => status_codes::TROPICAL_STORM,
            StormStatus::Hurricane => status_codes::HURRICANE,
            StormStatus::Extratropical => status_codes::EXTRATROPICAL,
            StormStatus::SubtropicalDepression => status_codes::SUBTROPICAL_DEPRESSION,
            StormStatus::SubtropicalStorm => status_codes::SUBTROPICAL_STORM,
            StormStatus::Low => status_codes::LOW,
            StormStatus::TropicalWave => status_codes::TROPICAL_WAVE,
            StormStatus::Disturbance => status_codes::DISTURBANCE,
            StormStatus::Other(code) => code,
        }
    }

    pub fn is_hurricane(&self) -> bool {
        matches!(self, StormStatus::Hurricane)
    }
}

impl FromStr for StormStatus {
    type Err = Infallible;

    /// Codes are matched case-insensitively
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Ok(match code.as_str() {
            status_codes::TROPICAL_DEPRESSION => StormStatus::TropicalDepression,
            status_codes::TROPICAL_STORM => StormStatus::TropicalStorm,
            status_codes::HURRICANE => StormStatus::Hurricane,
            status_codes::EXTRATROPICAL => StormStatus::Extratropical,
            status_codes::SUBTROPICAL_DEPRESSION => StormStatus::SubtropicalDepression,
            status_codes::SUBTROPICAL_STORM => StormStatus::SubtropicalStorm,
            status_codes::LOW => StormStatus::Low,
            status_codes::TROPICAL_WAVE => StormStatus::TropicalWave,
            status_codes::DISTURBANCE => StormStatus::Disturbance,
            _ => StormStatus::Other(code),
        })
    }
}

impl From<String> for StormStatus {
    fn from(value: String) -> Self {
        let Ok(status) = value.parse::<StormStatus>();
        status
    }
}

impl From<StormStatus> for String {
    fn from(value: StormStatus) -> Self {
        value.code().to_string()
    }
}

impl std::fmt::Display for StormStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Observation subtype from the record identifier column
///
/// Stored for completeness only. Landfall detection never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordIdentifier {
    /// Blank identifier: a routine synoptic-time entry
    Standard,
    ClosestApproach,
    Genesis,
    IntensityPeak,
    Landfall,
    MinimumPressure,
    RapidChanges,
    StatusChange,
    TrackDetail,
    MaximumWind,
    Other(String),
}

impl RecordIdentifier {
    pub fn code(&self) -> &str {
        match self {
            RecordIdentifier::Standard => "",
            RecordIdentifier::ClosestApproach => record_identifiers::CLOSEST_APPROACH,
            RecordIdentifier::Genesis => record_identifiers::GENESIS,
            RecordIdentifier::IntensityPeak => record_identifiers::INTENSITY_PEAK,
            RecordIdentifier::Landfall => record_identifiers::LANDFALL,
            RecordIdentifier::MinimumPressure => record_identifiers::MIN_PRESSURE,
            RecordIdentifier::RapidChanges => record_identifiers::RAPID_CHANGES,
            RecordIdentifier::StatusChange => record_identifiers::STATUS_CHANGE,
            RecordIdentifier::TrackDetail => record_identifiers::TRACK_DETAIL,
            RecordIdentifier::MaximumWind => record_identifiers::MAX_WIND,
            RecordIdentifier::Other(code) => code,
        }
    }
}

impl FromStr for RecordIdentifier {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim() {
            "" => RecordIdentifier::Standard,
            record_identifiers::CLOSEST_APPROACH => RecordIdentifier::ClosestApproach,
            record_identifiers::GENESIS => RecordIdentifier::Genesis,
            record_identifiers::INTENSITY_PEAK => RecordIdentifier::IntensityPeak,
            record_identifiers::LANDFALL => RecordIdentifier::Landfall,
            record_identifiers::MIN_PRESSURE => RecordIdentifier::MinimumPressure,
            record_identifiers::RAPID_CHANGES => RecordIdentifier::RapidChanges,
            record_identifiers::STATUS_CHANGE => RecordIdentifier::StatusChange,
            record_identifiers::TRACK_DETAIL => RecordIdentifier::TrackDetail,
            record_identifiers::MAX_WIND => RecordIdentifier::MaximumWind,
            other => RecordIdentifier::Other(other.to_string()),
        })
    }
}

// =============================================================================
// Track Structures
// =============================================================================

/// One best-track observation of a storm
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    /// Identifier of the owning storm
    pub storm_id: StormId,

    /// Display name of the owning storm (e.g. "ANDREW", "UNNAMED")
    pub storm_name: String,

    /// Observation time in UTC, minute precision
    pub timestamp: DateTime<Utc>,

    pub record_identifier: RecordIdentifier,

    pub status: StormStatus,

    /// Signed degrees, north positive
    pub latitude: f64,

    /// Signed degrees, east positive
    pub longitude: f64,

    /// Maximum sustained wind in knots; `None` when not recorded
    pub max_wind_kt: Option<u16>,
}

impl TrackPoint {
    /// Position as a (latitude, longitude) pair
    pub fn position(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// All observations of one storm, in source order
#[derive(Debug, Clone, PartialEq)]
pub struct StormTrack {
    pub storm_id: StormId,
    pub name: String,
    points: Vec<TrackPoint>,
}

impl StormTrack {
    pub fn new(storm_id: StormId, name: String, points: Vec<TrackPoint>) -> Self {
        Self {
            storm_id,
            name,
            points,
        }
    }

    pub fn points(&self) -> &[TrackPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn basin(&self) -> Option<Basin> {
        self.storm_id.basin()
    }

    /// Season year, from the identifier or else the first observation
    pub fn year(&self) -> Option<i32> {
        self.storm_id
            .year()
            .or_else(|| self.points.first().map(|p| p.timestamp.year()))
    }

    /// Highest maximum sustained wind over the whole track
    pub fn peak_wind_kt(&self) -> Option<u16> {
        self.points.iter().filter_map(|p| p.max_wind_kt).max()
    }

    /// First and last observation times
    pub fn time_span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.timestamp, last.timestamp)),
            _ => None,
        }
    }
}

// =============================================================================
// Landfall Output
// =============================================================================

/// The track point selected as a storm's landfall
#[derive(Debug, Clone, PartialEq)]
pub struct LandfallEvent {
    pub storm_id: StormId,
    pub storm_name: String,
    pub timestamp: DateTime<Utc>,
    pub max_wind_kt: Option<u16>,
    pub latitude: f64,
    pub longitude: f64,

    /// Index of the selected point within its track
    pub point_index: usize,
}

impl LandfallEvent {
    pub fn from_point(point: &TrackPoint, point_index: usize) -> Self {
        Self {
            storm_id: point.storm_id.clone(),
            storm_name: point.storm_name.clone(),
            timestamp: point.timestamp,
            max_wind_kt: point.max_wind_kt,
            latitude: point.latitude,
            longitude: point.longitude,
            point_index,
        }
    }
}

/// One line of the final landfall report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub name: String,
    pub storm_id: StormId,
    pub timestamp: DateTime<Utc>,
    pub max_wind_kt: Option<u16>,
}

impl From<&LandfallEvent> for ReportRow {
    fn from(event: &LandfallEvent) -> Self {
        Self {
            name: event.storm_name.clone(),
            storm_id: event.storm_id.clone(),
            timestamp: event.timestamp,
            max_wind_kt: event.max_wind_kt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_point(name: &str, status: StormStatus, wind: u16) -> TrackPoint {
        TrackPoint {
            storm_id: StormId::new("AL092004"),
            storm_name: name.to_string(),
            timestamp: Utc.with_ymd_and_hms(2004, 9, 16, 6, 50, 0).unwrap(),
            record_identifier: RecordIdentifier::Landfall,
            status,
            latitude: 30.2,
            longitude: -87.9,
            max_wind_kt: Some(wind),
        }
    }

    #[test]
    fn test_storm_id_components() {
        let id = StormId::new("  AL092004 ");

        assert_eq!(id.as_str(), "AL092004");
        assert_eq!(id.basin(), Some(Basin::Atlantic));
        assert_eq!(id.cyclone_number(), Some(9));
        assert_eq!(id.year(), Some(2004));
    }

    #[test]
    fn test_storm_id_non_canonical() {
        let id = StormId::new("ALXX");

        assert_eq!(id.basin(), Some(Basin::Atlantic));
        assert_eq!(id.cyclone_number(), None);
        assert_eq!(id.year(), None);
    }

    #[test]
    fn test_basin_line_prefix() {
        assert_eq!(
            Basin::from_line_prefix("EP011949, UNNAMED, 5,"),
            Some(Basin::NortheastPacific)
        );
        assert_eq!(Basin::from_line_prefix("CP"), Some(Basin::NorthCentralPacific));
        assert_eq!(Basin::from_line_prefix("18510625, 0000"), None);
        assert_eq!(Basin::from_line_prefix("A"), None);
    }

    #[test]
    fn test_storm_status_codes() {
        assert_eq!("HU".parse::<StormStatus>().unwrap(), StormStatus::Hurricane);
        assert_eq!(" TS ".parse::<StormStatus>().unwrap(), StormStatus::TropicalStorm);
        assert_eq!(
            "ZZ".parse::<StormStatus>().unwrap(),
            StormStatus::Other("ZZ".to_string())
        );
        assert_eq!(StormStatus::Other("ZZ".to_string()).code(), "ZZ");
        assert_eq!("hu".parse::<StormStatus>().unwrap(), StormStatus::Hurricane);
        assert_eq!(
            "zz".parse::<StormStatus>().unwrap(),
            StormStatus::Other("ZZ".to_string())
        );
        assert!(StormStatus::Hurricane.is_hurricane());
        assert!(!StormStatus::Extratropical.is_hurricane());
    }

    #[test]
    fn test_storm_status_serde_as_code() {
        let json = serde_json::to_string(&StormStatus::Hurricane).unwrap();
        assert_eq!(json, "\"HU\"");

        let status: StormStatus = serde_json::from_str("\"EX\"").unwrap();
        assert_eq!(status, StormStatus::Extratropical);
    }

    #[test]
    fn test_record_identifier_blank_is_standard() {
        assert_eq!(
            "  ".parse::<RecordIdentifier>().unwrap(),
            RecordIdentifier::Standard
        );
        assert_eq!("L".parse::<RecordIdentifier>().unwrap(), RecordIdentifier::Landfall);
    }

    #[test]
    fn test_storm_track_summary() {
        let mut late = create_test_point("IVAN", StormStatus::TropicalStorm, 50);
        late.timestamp = Utc.with_ymd_and_hms(2004, 9, 17, 0, 0, 0).unwrap();
        let track = StormTrack::new(
            StormId::new("AL092004"),
            "IVAN".to_string(),
            vec![create_test_point("IVAN", StormStatus::Hurricane, 105), late],
        );

        assert_eq!(track.len(), 2);
        assert_eq!(track.peak_wind_kt(), Some(105));
        assert_eq!(track.year(), Some(2004));
        let (start, end) = track.time_span().unwrap();
        assert!(start < end);
    }

    #[test]
    fn test_report_row_from_event() {
        let point = create_test_point("IVAN", StormStatus::Hurricane, 105);
        let event = LandfallEvent::from_point(&point, 3);
        let row = ReportRow::from(&event);

        assert_eq!(row.name, "IVAN");
        assert_eq!(row.max_wind_kt, Some(105));
        assert_eq!(row.timestamp, point.timestamp);
        assert_eq!(event.point_index, 3);
    }
}
