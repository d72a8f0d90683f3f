use serde::{Deserialize, Serialize};

use crate::contour::Contour;
use crate::geo::Projection;
use crate::polygon::Polygon;

/// A set of points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiPoint<P>(pub Vec<P>);

impl<P> MultiPoint<P> {
    /// Returns reference to the inner points.
    pub fn points(&self) -> &[P] {
        &self.0
    }

    pub(crate) fn project_points<T, Proj>(&self, projection: &Proj) -> Option<MultiPoint<T>>
    where
        Proj: Projection<InPoint = P, OutPoint = T> + ?Sized,
    {
        self.0
            .iter()
            .map(|p| projection.project(p))
            .collect::<Option<Vec<T>>>()
            .map(MultiPoint)
    }
}

/// A set of contours (paths of a multi-part line).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiContour<P>(pub Vec<Contour<P>>);

impl<P> MultiContour<P> {
    /// Returns reference to the inner contours.
    pub fn contours(&self) -> &[Contour<P>] {
        &self.0
    }

    pub(crate) fn project_points<T, Proj>(&self, projection: &Proj) -> Option<MultiContour<T>>
    where
        Proj: Projection<InPoint = P, OutPoint = T> + ?Sized,
    {
        self.0
            .iter()
            .map(|c| c.project_points(projection))
            .collect::<Option<Vec<Contour<T>>>>()
            .map(MultiContour)
    }
}

/// A set of polygons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiPolygon<P> {
    /// Inner polygons.
    pub parts: Vec<Polygon<P>>,
}

impl<P> MultiPolygon<P> {
    /// Returns reference to the inner polygons.
    pub fn parts(&self) -> &[Polygon<P>] {
        &self.parts
    }

    pub(crate) fn project_points<T, Proj>(&self, projection: &Proj) -> Option<MultiPolygon<T>>
    where
        Proj: Projection<InPoint = P, OutPoint = T> + ?Sized,
    {
        self.parts
            .iter()
            .map(|p| p.project_points(projection))
            .collect::<Option<Vec<Polygon<T>>>>()
            .map(|parts| MultiPolygon { parts })
    }
}

impl<P> From<Vec<Polygon<P>>> for MultiPolygon<P> {
    fn from(parts: Vec<Polygon<P>>) -> Self {
        Self { parts }
    }
}
