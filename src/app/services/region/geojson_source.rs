//! GeoJSON boundary loading
//!
//! Accepts a FeatureCollection, a single Feature or a bare Geometry. When a
//! region name is given, only features whose name property matches it
//! (case-insensitive) contribute polygons.

use std::path::Path;

use geo::{Geometry, MultiPolygon, Polygon};
use geojson::{Feature, GeoJson};
use tracing::debug;

use super::polygon::PolygonRegion;
use crate::{Error, Result};

/// Load a named region from a GeoJSON file on disk
pub fn load_geojson_region(
    path: &Path,
    region_name: Option<&str>,
    name_field: &str,
) -> Result<PolygonRegion> {
    let origin = path.display().to_string();
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read boundary file {}", origin), e))?;

    geojson_region_from_str(&text, &origin, region_name, name_field)
}

/// Build a region from GeoJSON text; `origin` is only used in error messages
pub fn geojson_region_from_str(
    text: &str,
    origin: &str,
    region_name: Option<&str>,
    name_field: &str,
) -> Result<PolygonRegion> {
    let geojson: GeoJson = text.parse().map_err(|e| Error::geojson(origin, e))?;

    let mut polygons = Vec::new();
    let mut matched_features = 0usize;

    match geojson {
        GeoJson::FeatureCollection(collection) => {
            for feature in collection.features {
                if feature_matches(&feature, region_name, name_field) {
                    matched_features += 1;
                    collect_feature(feature, origin, &mut polygons)?;
                }
            }
        }
        GeoJson::Feature(feature) => {
            if feature_matches(&feature, region_name, name_field) {
                matched_features += 1;
                collect_feature(feature, origin, &mut polygons)?;
            }
        }
        GeoJson::Geometry(geometry) => {
            matched_features += 1;
            let geometry: Geometry<f64> = geometry
                .try_into()
                .map_err(|e| Error::geojson(origin, e))?;
            collect_polygons(geometry, &mut polygons);
        }
    }

    if matched_features == 0 {
        return Err(Error::capability(match region_name {
            Some(name) => format!(
                "no feature with {} = '{}' found in {}",
                name_field, name, origin
            ),
            None => format!("{} contains no features", origin),
        }));
    }

    debug!(
        "Loaded {} polygon(s) from {} matching feature(s) in {}",
        polygons.len(),
        matched_features,
        origin
    );

    let name = region_name.unwrap_or(origin);
    PolygonRegion::new(name, MultiPolygon(polygons))
}

fn feature_matches(feature: &Feature, region_name: Option<&str>, name_field: &str) -> bool {
    let Some(wanted) = region_name else {
        return true;
    };

    feature
        .property(name_field)
        .and_then(|value| value.as_str())
        .is_some_and(|name| name.trim().eq_ignore_ascii_case(wanted.trim()))
}

fn collect_feature(feature: Feature, origin: &str, polygons: &mut Vec<Polygon<f64>>) -> Result<()> {
    let Some(geometry) = feature.geometry else {
        return Ok(());
    };

    let geometry: Geometry<f64> = geometry
        .try_into()
        .map_err(|e| Error::geojson(origin, e))?;
    collect_polygons(geometry, polygons);
    Ok(())
}

fn collect_polygons(geometry: Geometry<f64>, polygons: &mut Vec<Polygon<f64>>) {
    match geometry {
        Geometry::Polygon(polygon) => polygons.push(polygon),
        Geometry::MultiPolygon(multi) => polygons.extend(multi.0),
        Geometry::GeometryCollection(collection) => {
            for inner in collection.0 {
                collect_polygons(inner, polygons);
            }
        }
        // Points and lines have no area to land on
        _ => {}
    }
}
