//! Region boundaries and point membership
//!
//! A region is anything implementing [`RegionBoundary`]. Two implementations
//! are provided:
//!
//! - [`PolygonRegion`] - real coastline geometry loaded from GeoJSON or a
//!   shapefile, tested with `geo`
//! - [`BoundingBox`] - an inclusive latitude/longitude rectangle, mostly for
//!   tests and quick experiments
//!
//! Points on a polygon's edge count as inside the region.

pub mod boundary;
pub mod geojson_source;
pub mod loader;
pub mod polygon;
pub mod shapefile_source;

pub use boundary::{BoundingBox, RegionBoundary};
pub use geojson_source::{geojson_region_from_str, load_geojson_region};
pub use loader::{BoundaryFormat, load_region};
pub use polygon::PolygonRegion;
pub use shapefile_source::load_shapefile_region;
