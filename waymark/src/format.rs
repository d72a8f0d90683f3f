//! Conversion of captured vertices into report-ready coordinate text.

use waymark_types::cartesian::Point2d;
use waymark_types::geo::{GeoPoint, Projection};

use crate::error::WaymarkError;

/// Textual renderings of a projected vertex sequence.
///
/// Both forms list the same geographic coordinates in the same order; they
/// only differ in layout. The text is recomputed from the current feature on
/// every report and is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinateText {
    pair_list: String,
    bracket_list: String,
}

impl CoordinateText {
    /// Coordinates as `lon lat` pairs separated by `", "`.
    pub fn pair_list(&self) -> &str {
        &self.pair_list
    }

    /// Coordinates as `[lon, lat]` array literals separated by `", "`.
    pub fn bracket_list(&self) -> &str {
        &self.bracket_list
    }

    /// Returns true if the text was built from an empty vertex sequence.
    pub fn is_empty(&self) -> bool {
        self.pair_list.is_empty()
    }
}

/// Projects each vertex to geographic coordinates and renders the two
/// textual forms of the sequence.
///
/// Coordinates are written with the projector's native precision, without
/// rounding. An empty vertex sequence produces empty strings rather than an
/// error, since a report can be requested before anything is drawn.
///
/// Returns [`WaymarkError::Projection`] if any vertex cannot be projected.
pub fn format_coordinates<Proj>(
    vertices: &[Point2d],
    projection: &Proj,
) -> Result<CoordinateText, WaymarkError>
where
    Proj: Projection<InPoint = Point2d> + ?Sized,
    Proj::OutPoint: GeoPoint<Num = f64>,
{
    let mut pairs = Vec::with_capacity(vertices.len());
    let mut brackets = Vec::with_capacity(vertices.len());

    for vertex in vertices {
        let coordinate = projection
            .project(vertex)
            .ok_or(WaymarkError::Projection)?;
        pairs.push(format!("{} {}", coordinate.lon(), coordinate.lat()));
        brackets.push(format!("[{}, {}]", coordinate.lon(), coordinate.lat()));
    }

    Ok(CoordinateText {
        pair_list: pairs.join(", "),
        bracket_list: brackets.join(", "),
    })
}
