//! HURDAT2 Landfall Library
//!
//! A Rust library for finding tropical cyclones that made landfall in a region
//! using the NOAA HURDAT2 best-track dataset.
//!
//! This library provides tools for:
//! - Parsing HURDAT2 header and observation lines into typed storm tracks
//! - Decoding hemisphere-suffixed coordinates into signed degrees
//! - Testing track positions against a region boundary (GeoJSON or shapefile)
//! - Selecting the first hurricane-strength position inside the region per storm
//! - Assembling a deduplicated report and rendering it as a table, CSV or JSON
//!
//! Landfall is inferred from position and intensity only; the dataset's own
//! `L` record identifier is stored but never consulted.

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod hurdat_parser;
        pub mod landfall_detector;
        pub mod pipeline;
        pub mod region;
        pub mod report;
    }
    pub mod adapters {
        pub mod source;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{LandfallEvent, ReportRow, StormId, StormStatus, StormTrack, TrackPoint};
pub use app::services::region::RegionBoundary;
pub use config::Config;

/// Result type alias for the landfall library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for parsing, region loading and reporting
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Malformed HURDAT2 line
    #[error("Format error on line {line_number}: {message} (line: '{line}')")]
    Format {
        line_number: usize,
        line: String,
        message: String,
    },

    /// Coordinate token that could not be decoded
    #[error("Invalid coordinate '{token}': {reason}")]
    InvalidCoordinate { token: String, reason: String },

    /// Region boundary missing, empty or unusable
    #[error("Region boundary unavailable: {message}")]
    Capability { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Dataset download failed
    #[error("HTTP error fetching '{url}': {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// GeoJSON boundary could not be read
    #[error("GeoJSON error in '{path}': {source}")]
    GeoJson {
        path: String,
        #[source]
        source: Box<geojson::Error>,
    },

    /// Shapefile boundary could not be read
    #[error("Shapefile error in '{path}': {source}")]
    Shapefile {
        path: String,
        #[source]
        source: shapefile::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Report rendering error
    #[error("Report rendering error: {message}")]
    Report { message: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create a format error for a specific input line
    pub fn format(line_number: usize, line: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Format {
            line_number,
            line: line.into(),
            message: message.into(),
        }
    }

    /// Create an invalid coordinate error
    pub fn invalid_coordinate(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Create a capability error for an unusable region boundary
    pub fn capability(message: impl Into<String>) -> Self {
        Self::Capability {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an HTTP error for a dataset URL
    pub fn http(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            url: url.into(),
            source,
        }
    }

    /// Create a GeoJSON error
    pub fn geojson(path: impl Into<String>, source: geojson::Error) -> Self {
        Self::GeoJson {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Create a shapefile error
    pub fn shapefile(path: impl Into<String>, source: shapefile::Error) -> Self {
        Self::Shapefile {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a report rendering error
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// True for malformed-input errors (bad lines or coordinate tokens)
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Format { .. } | Self::InvalidCoordinate { .. })
    }

    /// True when the region boundary could not be used
    pub fn is_capability_error(&self) -> bool {
        matches!(self, Self::Capability { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Report {
            message: format!("CSV output failed: {}", error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Report {
            message: format!("JSON output failed: {}", error),
        }
    }
}
