//! Configuration management for landfall detection
//!
//! Settings come from four layers, each overriding the previous one:
//! built-in defaults, a TOML file, `HURDAT_LANDFALL_*` environment variables
//! and finally command-line flags (applied by the CLI).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::models::StormStatus;
use crate::app::services::hurdat_parser::ParseMode;
use crate::app::services::landfall_detector::DetectionCriteria;
use crate::app::services::pipeline::PipelineOptions;
use crate::app::services::report::{DedupPolicy, OutputFormat};
use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DATASET_URL, DEFAULT_LOG_LEVEL, DEFAULT_NAME_FIELD,
    DEFAULT_REGION_NAME, env_vars,
};
use crate::{Error, Result};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub region: RegionConfig,
    pub detection: DetectionConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

/// Where the dataset is read from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Download URL, used when no local input file is set
    pub url: String,

    /// Local dataset file; takes precedence over `url`
    pub input: Option<PathBuf>,

    /// Keep downloads in the user cache directory and reuse them
    pub use_cache: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATASET_URL.to_string(),
            input: None,
            use_cache: true,
        }
    }
}

/// Target region boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    /// GeoJSON or shapefile path
    pub boundary: Option<PathBuf>,

    /// Feature/record to select; `None` takes every polygon in the file
    pub name: Option<String>,

    /// Attribute holding the region name
    pub name_field: String,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            boundary: None,
            name: Some(DEFAULT_REGION_NAME.to_string()),
            name_field: DEFAULT_NAME_FIELD.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub qualifying_status: StormStatus,
    pub parse_mode: ParseMode,
    pub dedup: DedupPolicy,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            qualifying_status: StormStatus::Hurricane,
            parse_mode: ParseMode::Strict,
            dedup: DedupPolicy::StormName,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: OutputFormat,

    /// Write the report here instead of stdout
    pub output: Option<PathBuf>,

    /// Colour the table header when writing to a terminal
    pub color: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            output: None,
            color: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level for this crate's log target
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Parse a TOML configuration file; missing keys keep their defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        toml::from_str(&text).map_err(|e| {
            Error::configuration(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    /// Defaults, then the config file, then environment variables
    ///
    /// An explicit path must exist; the default location is only read when
    /// a file is present there.
    pub fn load_layered(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match explicit_path {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Self::load_from_file(path)?
            }
            None => match default_config_path() {
                Some(path) if path.is_file() => {
                    debug!("Loading configuration from {}", path.display());
                    Self::load_from_file(&path)?
                }
                _ => Self::default(),
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply `HURDAT_LANDFALL_*` overrides using the given variable lookup
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = non_empty(env_vars::DATASET_URL) {
            self.source.url = url;
        }
        if let Some(input) = non_empty(env_vars::DATASET_INPUT) {
            self.source.input = Some(PathBuf::from(input));
        }
        if let Some(boundary) = non_empty(env_vars::BOUNDARY_PATH) {
            self.region.boundary = Some(PathBuf::from(boundary));
        }
        if let Some(region) = non_empty(env_vars::REGION_NAME) {
            self.region.name = Some(region);
        }
    }

    /// Check settings for consistency
    pub fn validate(&self) -> Result<()> {
        if self.source.input.is_none() {
            let url = self.source.url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(Error::configuration(format!(
                    "dataset URL must be http(s), got '{}'",
                    self.source.url
                )));
            }
        }

        if self.region.name_field.trim().is_empty() {
            return Err(Error::configuration("region name field must not be empty"));
        }

        if matches!(&self.region.name, Some(name) if name.trim().is_empty()) {
            return Err(Error::configuration("region name must not be blank"));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(Error::configuration(format!(
                "unknown log level '{}', expected one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Boundary path, required for landfall detection
    pub fn boundary_path(&self) -> Result<&Path> {
        self.region.boundary.as_deref().ok_or_else(|| {
            Error::configuration(format!(
                "no region boundary given; pass --boundary or set {}",
                env_vars::BOUNDARY_PATH
            ))
        })
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            parse_mode: self.detection.parse_mode,
            criteria: DetectionCriteria::new(self.detection.qualifying_status.clone()),
            dedup: self.detection.dedup,
        }
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.source.input = Some(input.into());
        self
    }

    pub fn with_boundary(mut self, boundary: impl Into<PathBuf>) -> Self {
        self.region.boundary = Some(boundary.into());
        self
    }

    pub fn with_region_name(mut self, name: Option<String>) -> Self {
        self.region.name = name;
        self
    }

    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.detection.parse_mode = mode;
        self
    }

    pub fn with_dedup(mut self, dedup: DedupPolicy) -> Self {
        self.detection.dedup = dedup;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.report.format = format;
        self
    }
}

/// `<config dir>/hurdat-landfall/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.source.url, DEFAULT_DATASET_URL);
        assert_eq!(config.region.name.as_deref(), Some("Florida"));
        assert_eq!(config.region.name_field, "NAME");
        assert_eq!(config.detection.qualifying_status, StormStatus::Hurricane);
        assert_eq!(config.detection.dedup, DedupPolicy::StormName);
        assert_eq!(config.report.format, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[region]
boundary = "/data/usa-states-census-2014.shp"
name = "Louisiana"

[detection]
parse_mode = "lenient"
dedup = "storm-id"
qualifying_status = "TS"

[report]
format = "csv"
"#
        )
        .unwrap();

        let config = Config::load_from_file(file.path()).unwrap();

        assert_eq!(
            config.region.boundary.as_deref(),
            Some(Path::new("/data/usa-states-census-2014.shp"))
        );
        assert_eq!(config.region.name.as_deref(), Some("Louisiana"));
        assert_eq!(config.region.name_field, "NAME");
        assert_eq!(config.detection.parse_mode, ParseMode::Lenient);
        assert_eq!(config.detection.dedup, DedupPolicy::StormId);
        assert_eq!(config.detection.qualifying_status, StormStatus::TropicalStorm);
        assert_eq!(config.report.format, OutputFormat::Csv);
        assert_eq!(config.source.url, DEFAULT_DATASET_URL);
    }

    #[test]
    fn test_lowercase_status_code_is_accepted() {
        let config: Config = toml::from_str(
            r#"
[detection]
qualifying_status = "hu"
"#,
        )
        .unwrap();

        assert_eq!(config.detection.qualifying_status, StormStatus::Hurricane);
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[report]\nformat = \"pdf\"").unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let err = Config::load_layered(Some(Path::new("/nonexistent/config.toml"))).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (env_vars::DATASET_URL, "https://example.com/hurdat2.txt"),
            (env_vars::BOUNDARY_PATH, "/tmp/states.geojson"),
            (env_vars::REGION_NAME, "Texas"),
            (env_vars::DATASET_INPUT, "  "),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.source.url, "https://example.com/hurdat2.txt");
        assert_eq!(config.source.input, None);
        assert_eq!(
            config.region.boundary.as_deref(),
            Some(Path::new("/tmp/states.geojson"))
        );
        assert_eq!(config.region.name.as_deref(), Some("Texas"));
    }

    #[test]
    fn test_validation_failures() {
        let mut config = Config::default();
        config.source.url = "ftp://example.com/data.txt".to_string();
        assert!(config.validate().is_err());

        // A local input makes the URL irrelevant
        let config = config.with_input("/data/hurdat2.txt");
        assert!(config.validate().is_ok());

        let mut config = Config::default();
        config.region.name_field = " ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_boundary_required_for_detection() {
        let config = Config::default();
        assert!(config.boundary_path().is_err());

        let config = config.with_boundary("/data/florida.geojson");
        assert_eq!(
            config.boundary_path().unwrap(),
            Path::new("/data/florida.geojson")
        );
    }

    #[test]
    fn test_pipeline_options_follow_config() {
        let config = Config::default()
            .with_parse_mode(ParseMode::Lenient)
            .with_dedup(DedupPolicy::StormId);

        let options = config.pipeline_options();
        assert_eq!(options.parse_mode, ParseMode::Lenient);
        assert_eq!(options.dedup, DedupPolicy::StormId);
        assert_eq!(options.criteria, DetectionCriteria::default());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = Config::default().with_boundary("/data/florida.geojson");
        let text = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();

        assert_eq!(parsed, config);
    }
}
