use std::marker::PhantomData;

use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d};
use crate::geo::datum::Datum;
use crate::geo::point::NewGeoPoint;

/// Conversion between two coordinate spaces.
pub trait Projection {
    /// Type of the input points.
    type InPoint;
    /// Type of the output points.
    type OutPoint;

    /// Projects the input point. Returns `None` if the point cannot be
    /// represented in the target space.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;

    /// Projects a point of the target space back into the source space.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}

/// Adapter that swaps the direction of the inner projection.
///
/// The sketch pipeline needs the map-to-geographic direction of
/// [`WebMercator`], so it wraps it into this adapter before handing it over
/// to the formatter.
pub struct InvertedProjection<P> {
    inner: P,
}

impl<P> InvertedProjection<P> {
    /// Creates a new adapter over the given projection.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: Projection> Projection for InvertedProjection<P> {
    type InPoint = P::OutPoint;
    type OutPoint = P::InPoint;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        self.inner.unproject(input)
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        self.inner.project(input)
    }
}

/// Spherical Web Mercator projection (the projection used by most web maps).
#[derive(Debug, Copy, Clone)]
pub struct WebMercator<In, Out> {
    datum: Datum,
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> WebMercator<In, Out> {
    /// Creates a new projection based on the given datum.
    pub fn new(datum: Datum) -> Self {
        Self {
            datum,
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        }
    }
}

impl<In, Out> Default for WebMercator<In, Out> {
    fn default() -> Self {
        Self {
            datum: Datum::WGS84,
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        }
    }
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> Projection for WebMercator<In, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let x = self.datum.semimajor() * input.lon_rad();
        let y = self.datum.semimajor()
            * (std::f64::consts::FRAC_PI_4 + input.lat_rad() / 2.0)
                .tan()
                .ln();

        if x.is_finite() && y.is_finite() {
            Some(Self::OutPoint::new(x, y))
        } else {
            None
        }
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let lon_rad = input.x() / self.datum.semimajor();
        let lat_rad = std::f64::consts::FRAC_PI_2
            - 2.0 * (-input.y() / self.datum.semimajor()).exp().atan();

        if lon_rad.is_finite() && lat_rad.is_finite() {
            Some(Self::InPoint::latlon(
                lat_rad.to_degrees(),
                lon_rad.to_degrees(),
            ))
        } else {
            None
        }
    }
}
