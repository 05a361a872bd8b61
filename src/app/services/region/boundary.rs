//! Region membership contract
//!
//! Detection only ever asks a region one question: does it contain this
//! position? Anything that can answer that is a [`RegionBoundary`].

use crate::{Error, Result};

/// A fixed geographic region that answers point containment queries
///
/// Implementations must be pure: the same position always yields the same
/// answer and queries never mutate shared state. How points lying exactly on
/// the boundary are treated is up to the implementation, as long as it is consistent.
pub trait RegionBoundary: Send + Sync {
    /// True if the position (signed degrees) lies in the region
    fn contains(&self, lat: f64, lon: f64) -> bool;

    /// Human-readable region name for logs and reports
    fn name(&self) -> &str {
        "region"
    }
}

impl<T: RegionBoundary + ?Sized> RegionBoundary for &T {
    fn contains(&self, lat: f64, lon: f64) -> bool {
        (**self).contains(lat, lon)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: RegionBoundary + ?Sized> RegionBoundary for Box<T> {
    fn contains(&self, lat: f64, lon: f64) -> bool {
        (**self).contains(lat, lon)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Axis-aligned latitude/longitude box, edges inclusive
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    name: String,
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl BoundingBox {
    pub fn new(
        name: impl Into<String>,
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
    ) -> Result<Self> {
        let name = name.into();

        let finite = [min_lat, max_lat, min_lon, max_lon]
            .iter()
            .all(|v| v.is_finite());
        if !finite || min_lat > max_lat || min_lon > max_lon {
            return Err(Error::capability(format!(
                "bounding box '{}' is empty or inverted",
                name
            )));
        }

        if min_lat < -90.0 || max_lat > 90.0 || min_lon < -180.0 || max_lon > 180.0 {
            return Err(Error::capability(format!(
                "bounding box '{}' lies outside valid latitude/longitude ranges",
                name
            )));
        }

        Ok(Self {
            name,
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        })
    }
}

impl RegionBoundary for BoundingBox {
    fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lon..=self.max_lon).contains(&lon)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
