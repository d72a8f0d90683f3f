//! Trait based geometry and projection primitives for the `waymark` sketch
//! toolkit.
//!
//! Geometries captured from a drawing tool live in the map's native projected
//! coordinate space and are represented by types implementing
//! [`CartesianPoint2d`](cartesian::CartesianPoint2d). Geographic coordinates
//! (degrees of longitude and latitude) are represented by types implementing
//! [`GeoPoint`](geo::GeoPoint). Conversion between the two spaces goes
//! through the [`Projection`](geo::Projection) seam, of which
//! [`WebMercator`](geo::WebMercator) is the implementation used by the
//! sketch pipeline.

pub mod cartesian;
pub mod geo;

mod contour;
mod geometry;
mod multi;
mod polygon;

pub use contour::{ClosedContour, Contour};
pub use geometry::Geom;
pub use multi::{MultiContour, MultiPoint, MultiPolygon};
pub use polygon::Polygon;
