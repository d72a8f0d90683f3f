use crate::contour::Contour;
use crate::geo::Projection;
use crate::multi::{MultiContour, MultiPoint, MultiPolygon};
use crate::polygon::Polygon;

/// A geometry of any of the supported types.
#[derive(Debug, Clone, PartialEq)]
pub enum Geom<P> {
    /// A single point.
    Point(P),
    /// A set of points.
    MultiPoint(MultiPoint<P>),
    /// A line or a ring.
    Contour(Contour<P>),
    /// A multi-part line.
    MultiContour(MultiContour<P>),
    /// A polygon with optional holes.
    Polygon(Polygon<P>),
    /// A set of polygons.
    MultiPolygon(MultiPolygon<P>),
}

impl<P> Geom<P> {
    /// Projects every vertex of the geometry with the given projection,
    /// preserving vertex order. Returns `None` if any vertex cannot be
    /// projected.
    pub fn project<Proj>(&self, projection: &Proj) -> Option<Geom<Proj::OutPoint>>
    where
        Proj: Projection<InPoint = P> + ?Sized,
    {
        match self {
            Geom::Point(v) => Some(Geom::Point(projection.project(v)?)),
            Geom::MultiPoint(v) => Some(Geom::MultiPoint(v.project_points(projection)?)),
            Geom::Contour(v) => Some(Geom::Contour(v.project_points(projection)?)),
            Geom::MultiContour(v) => Some(Geom::MultiContour(v.project_points(projection)?)),
            Geom::Polygon(v) => Some(Geom::Polygon(v.project_points(projection)?)),
            Geom::MultiPolygon(v) => Some(Geom::MultiPolygon(v.project_points(projection)?)),
        }
    }
}

impl<P> From<Contour<P>> for Geom<P> {
    fn from(value: Contour<P>) -> Self {
        Self::Contour(value)
    }
}

impl<P> From<Polygon<P>> for Geom<P> {
    fn from(value: Polygon<P>) -> Self {
        Self::Polygon(value)
    }
}

impl<P> From<MultiPolygon<P>> for Geom<P> {
    fn from(value: MultiPolygon<P>) -> Self {
        Self::MultiPolygon(value)
    }
}
