//! Boundary file format detection and dispatch

use std::path::Path;

use tracing::info;

use super::boundary::RegionBoundary;
use super::geojson_source::load_geojson_region;
use super::polygon::PolygonRegion;
use super::shapefile_source::load_shapefile_region;
use crate::constants::{GEOJSON_EXTENSIONS, SHAPEFILE_EXTENSIONS};
use crate::{Error, Result};

/// Supported boundary file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryFormat {
    GeoJson,
    Shapefile,
}

impl BoundaryFormat {
    /// Pick a format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if GEOJSON_EXTENSIONS.contains(&extension.as_str()) {
            Ok(Self::GeoJson)
        } else if SHAPEFILE_EXTENSIONS.contains(&extension.as_str()) {
            Ok(Self::Shapefile)
        } else {
            Err(Error::capability(format!(
                "unsupported boundary file '{}': expected .geojson, .json or .shp",
                path.display()
            )))
        }
    }
}

/// Load a region boundary from a GeoJSON or shapefile path
///
/// `region_name` selects features by their `name_field` attribute; `None`
/// unions every polygon in the file.
pub fn load_region(
    path: &Path,
    region_name: Option<&str>,
    name_field: &str,
) -> Result<PolygonRegion> {
    if !path.exists() {
        return Err(Error::capability(format!(
            "boundary file not found: {}",
            path.display()
        )));
    }

    let format = BoundaryFormat::from_path(path)?;
    let region = match format {
        BoundaryFormat::GeoJson => load_geojson_region(path, region_name, name_field)?,
        BoundaryFormat::Shapefile => load_shapefile_region(path, region_name, name_field)?,
    };

    info!(
        "Loaded region boundary '{}' ({} part(s)) from {}",
        region.name(),
        region.part_count(),
        path.display()
    );

    Ok(region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            BoundaryFormat::from_path(Path::new("states.geojson")).unwrap(),
            BoundaryFormat::GeoJson
        );
        assert_eq!(
            BoundaryFormat::from_path(Path::new("states.JSON")).unwrap(),
            BoundaryFormat::GeoJson
        );
        assert_eq!(
            BoundaryFormat::from_path(Path::new("usa-states-census-2014.shp")).unwrap(),
            BoundaryFormat::Shapefile
        );
        assert!(BoundaryFormat::from_path(Path::new("states.kml")).is_err());
        assert!(BoundaryFormat::from_path(Path::new("states")).is_err());
    }

    #[test]
    fn test_missing_boundary_is_capability_error() {
        let err = load_region(Path::new("/nonexistent/region.geojson"), None, "NAME").unwrap_err();
        assert!(err.is_capability_error());
    }

    #[test]
    fn test_load_region_dispatches_geojson() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("box.geojson");
        fs::write(
            &path,
            r#"{"type": "Feature", "properties": {"NAME": "Box"},
                "geometry": {"type": "Polygon",
                "coordinates": [[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [0.0, 0.0]]]}}"#,
        )
        .unwrap();

        let region = load_region(&path, Some("box"), "NAME").unwrap();
        assert!(region.contains(1.0, 1.0));
    }
}
