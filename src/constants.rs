//! Application constants for the HURDAT2 landfall reporter
//!
//! This module contains the HURDAT2 format codes, default values and
//! well-known locations used throughout the application.

// =============================================================================
// Dataset Source
// =============================================================================

/// Default HURDAT2 Atlantic dataset published by the National Hurricane Center
pub const DEFAULT_DATASET_URL: &str =
    "https://www.nhc.noaa.gov/data/hurdat/hurdat2-1851-2021-041922.txt";

/// Directory name used under the user cache and config directories
pub const APP_DIR_NAME: &str = "hurdat-landfall";

/// Configuration file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overrides
pub mod env_vars {
    pub const DATASET_URL: &str = "HURDAT_LANDFALL_URL";
    pub const DATASET_INPUT: &str = "HURDAT_LANDFALL_INPUT";
    pub const BOUNDARY_PATH: &str = "HURDAT_LANDFALL_BOUNDARY";
    pub const REGION_NAME: &str = "HURDAT_LANDFALL_REGION";
}

// =============================================================================
// HURDAT2 Line Format
// =============================================================================

/// Field positions within a header line (`AL011851, UNNAMED, 14,`)
pub mod header_fields {
    pub const STORM_ID: usize = 0;
    pub const NAME: usize = 1;
    pub const ENTRY_COUNT: usize = 2;

    /// Minimum fields required to accept a header line
    pub const MIN_FIELDS: usize = 2;
}

/// Field positions within an observation line
/// (`18510625, 0000,  , HU, 28.0N,  94.8W,  80, ...`)
pub mod observation_fields {
    pub const DATE: usize = 0;
    pub const TIME: usize = 1;
    pub const RECORD_IDENTIFIER: usize = 2;
    pub const STATUS: usize = 3;
    pub const LATITUDE: usize = 4;
    pub const LONGITUDE: usize = 5;
    pub const MAX_WIND: usize = 6;

    /// Minimum fields required to accept an observation line
    pub const MIN_FIELDS: usize = 7;

    /// Maximum wind value meaning "not recorded"
    pub const MISSING_WIND: i32 = -99;
}

/// Storm identifier shape: basin, cyclone number, year (`AL092004`)
pub const STORM_ID_PATTERN: &str = r"^(?P<basin>[A-Z]{2})(?P<number>\d{2})(?P<year>\d{4})$";

/// Two-letter basin prefixes that mark a header line
pub mod basins {
    pub const ATLANTIC: &str = "AL";
    pub const NORTHEAST_PACIFIC: &str = "EP";
    pub const NORTH_CENTRAL_PACIFIC: &str = "CP";
}

/// Storm status codes (system status column)
pub mod status_codes {
    pub const TROPICAL_DEPRESSION: &str = "TD";
    pub const TROPICAL_STORM: &str = "TS";
    pub const HURRICANE: &str = "HU";
    pub const EXTRATROPICAL: &str = "EX";
    pub const SUBTROPICAL_DEPRESSION: &str = "SD";
    pub const SUBTROPICAL_STORM: &str = "SS";
    pub const LOW: &str = "LO";
    pub const TROPICAL_WAVE: &str = "WV";
    pub const DISTURBANCE: &str = "DB";
}

/// Record identifier codes (observation subtype column)
pub mod record_identifiers {
    pub const CLOSEST_APPROACH: &str = "C";
    pub const GENESIS: &str = "G";
    pub const INTENSITY_PEAK: &str = "I";
    pub const LANDFALL: &str = "L";
    pub const MIN_PRESSURE: &str = "P";
    pub const RAPID_CHANGES: &str = "R";
    pub const STATUS_CHANGE: &str = "S";
    pub const TRACK_DETAIL: &str = "T";
    pub const MAX_WIND: &str = "W";
}

// =============================================================================
// Region Boundary
// =============================================================================

/// Region reported on when none is configured
pub const DEFAULT_REGION_NAME: &str = "Florida";

/// Attribute holding the region name in census state boundary files
pub const DEFAULT_NAME_FIELD: &str = "NAME";

/// Supported boundary file extensions
pub const GEOJSON_EXTENSIONS: &[&str] = &["geojson", "json"];
pub const SHAPEFILE_EXTENSIONS: &[&str] = &["shp"];

// =============================================================================
// Logging
// =============================================================================

/// Default log level when no verbosity flags are given
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Target used for the default tracing filter
pub const LOG_TARGET: &str = "hurdat_landfall";
