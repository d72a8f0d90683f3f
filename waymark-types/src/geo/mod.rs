//! Geometries in geographic coordinates (latitude and longitude) (see
//! [`GeoPoint`]) and conversion between the geographic and projected
//! coordinate spaces (see [`Projection`]).

mod datum;
mod point;
mod projection;

pub use datum::Datum;
pub use point::{GeoPoint, GeoPoint2d, NewGeoPoint};
pub use projection::{InvertedProjection, Projection, WebMercator};
