//! ESRI shapefile boundary loading
//!
//! Reads the `.shp` geometry alongside its `.dbf` attribute table and keeps
//! the polygon records whose name attribute matches the requested region.

use std::path::Path;

use geo::{Coord, LineString, MultiPolygon, Polygon};
use shapefile::dbase::{FieldValue, Record};
use shapefile::{PolygonRing, Shape};
use tracing::{debug, warn};

use super::polygon::PolygonRegion;
use crate::{Error, Result};

/// Load a named region from a shapefile (the `.dbf` must sit next to the `.shp`)
pub fn load_shapefile_region(
    path: &Path,
    region_name: Option<&str>,
    name_field: &str,
) -> Result<PolygonRegion> {
    let origin = path.display().to_string();
    let mut reader =
        shapefile::Reader::from_path(path).map_err(|e| Error::shapefile(&origin, e))?;

    let mut polygons = Vec::new();
    let mut matched_records = 0usize;

    for result in reader.iter_shapes_and_records() {
        let (shape, record) = result.map_err(|e| Error::shapefile(&origin, e))?;

        if !record_matches(&record, region_name, name_field) {
            continue;
        }
        matched_records += 1;

        match shape {
            Shape::Polygon(polygon) => polygons.extend(convert_polygon(&polygon)),
            Shape::NullShape => {}
            other => warn!(
                "Skipping non-polygon shape ({:?}) in {}",
                other.shapetype(),
                origin
            ),
        }
    }

    if matched_records == 0 {
        return Err(Error::capability(match region_name {
            Some(name) => format!(
                "no record with {} = '{}' found in {}",
                name_field, name, origin
            ),
            None => format!("{} contains no records", origin),
        }));
    }

    debug!(
        "Loaded {} polygon(s) from {} matching record(s) in {}",
        polygons.len(),
        matched_records,
        origin
    );

    let name = region_name.unwrap_or(&origin);
    PolygonRegion::new(name, MultiPolygon(polygons))
}

fn record_matches(record: &Record, region_name: Option<&str>, name_field: &str) -> bool {
    let Some(wanted) = region_name else {
        return true;
    };

    match record.get(name_field) {
        Some(FieldValue::Character(Some(name))) => {
            name.trim().eq_ignore_ascii_case(wanted.trim())
        }
        _ => false,
    }
}

/// Split a shapefile polygon into `geo` polygons
///
/// Holes are attached to the outer ring that precedes them; a hole appearing
/// before any outer ring is dropped.
pub(crate) fn convert_polygon(polygon: &shapefile::Polygon) -> Vec<Polygon<f64>> {
    let mut parts: Vec<(LineString<f64>, Vec<LineString<f64>>)> = Vec::new();

    for ring in polygon.rings() {
        let line: LineString<f64> = ring
            .points()
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect();

        match ring {
            PolygonRing::Outer(_) => parts.push((line, Vec::new())),
            PolygonRing::Inner(_) => match parts.last_mut() {
                Some((_, holes)) => holes.push(line),
                None => debug!("Dropping hole ring with no enclosing outer ring"),
            },
        }
    }

    parts
        .into_iter()
        .map(|(exterior, holes)| Polygon::new(exterior, holes))
        .collect()
}
