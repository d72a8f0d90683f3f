use serde::{Deserialize, Serialize};

use crate::contour::ClosedContour;
use crate::geo::Projection;

/// A polygon with one outer ring and any number of holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon<P> {
    /// Outer ring of the polygon.
    pub outer_contour: ClosedContour<P>,
    /// Rings of the holes inside the polygon.
    pub inner_contours: Vec<ClosedContour<P>>,
}

impl<P> Polygon<P> {
    /// Creates a new polygon without holes.
    pub fn new(outer_contour: ClosedContour<P>) -> Self {
        Self {
            outer_contour,
            inner_contours: vec![],
        }
    }

    /// Iterates over the outer ring and then the hole rings.
    pub fn iter_contours(&self) -> impl Iterator<Item = &ClosedContour<P>> {
        std::iter::once(&self.outer_contour).chain(self.inner_contours.iter())
    }

    /// Projects all rings of the polygon, preserving point order. Returns
    /// `None` if any point cannot be projected.
    pub fn project_points<T, Proj>(&self, projection: &Proj) -> Option<Polygon<T>>
    where
        Proj: Projection<InPoint = P, OutPoint = T> + ?Sized,
    {
        let outer_contour = self.outer_contour.project_points(projection)?;
        let inner_contours = self
            .inner_contours
            .iter()
            .map(|c| c.project_points(projection))
            .collect::<Option<Vec<ClosedContour<T>>>>()?;
        Some(Polygon {
            outer_contour,
            inner_contours,
        })
    }
}

impl<P> From<ClosedContour<P>> for Polygon<P> {
    fn from(value: ClosedContour<P>) -> Self {
        Self {
            outer_contour: value,
            inner_contours: vec![],
        }
    }
}
