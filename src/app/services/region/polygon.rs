//! Polygonal region backed by `geo` geometry
//!
//! Holds a possibly multi-part polygon in longitude/latitude order and tests
//! points with `geo::Intersects`, so positions exactly on the boundary count
//! as inside. A bounding-rectangle check short-circuits distant points.

use geo::{BoundingRect, Intersects, MultiPolygon, Point, Polygon, Rect};

use super::boundary::RegionBoundary;
use crate::{Error, Result};

/// A named region made of one or more polygons
#[derive(Debug, Clone)]
pub struct PolygonRegion {
    name: String,
    geometry: MultiPolygon<f64>,
    bounds: Rect<f64>,
}

impl PolygonRegion {
    /// Build a region from a multi-polygon with x = longitude, y = latitude
    ///
    /// # Errors
    ///
    /// Returns a capability error if the geometry has no polygons or no extent.
    pub fn new(name: impl Into<String>, geometry: MultiPolygon<f64>) -> Result<Self> {
        let name = name.into();

        if geometry.0.is_empty() {
            return Err(Error::capability(format!(
                "region '{}' has no polygons",
                name
            )));
        }

        let bounds = geometry.bounding_rect().ok_or_else(|| {
            Error::capability(format!("region '{}' has an empty boundary", name))
        })?;

        Ok(Self {
            name,
            geometry,
            bounds,
        })
    }

    pub fn from_polygon(name: impl Into<String>, polygon: Polygon<f64>) -> Result<Self> {
        Self::new(name, MultiPolygon(vec![polygon]))
    }

    pub fn geometry(&self) -> &MultiPolygon<f64> {
        &self.geometry
    }

    pub fn part_count(&self) -> usize {
        self.geometry.0.len()
    }

    pub fn bounds(&self) -> Rect<f64> {
        self.bounds
    }

    fn within_bounds(&self, lat: f64, lon: f64) -> bool {
        let min = self.bounds.min();
        let max = self.bounds.max();
        lon >= min.x && lon <= max.x && lat >= min.y && lat <= max.y
    }
}

impl RegionBoundary for PolygonRegion {
    fn contains(&self, lat: f64, lon: f64) -> bool {
        if !self.within_bounds(lat, lon) {
            return false;
        }
        self.geometry.intersects(&Point::new(lon, lat))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
