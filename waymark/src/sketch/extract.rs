use waymark_types::cartesian::Point2d;
use waymark_types::Geom;

use crate::error::WaymarkError;
use crate::sketch::GraphicsStore;

/// Extracts the ordered vertex list of a captured feature, in the map's
/// native coordinate space.
///
/// For multi-part geometries only the first path (for lines) or the first
/// outer ring (for polygons) is taken, and polygon holes are skipped. This
/// mirrors the behavior of the drawing widget the pipeline was built around
/// and is kept intentionally.
///
/// Returns [`WaymarkError::NotFound`] if `feature_index` is out of range of
/// the collection, and [`WaymarkError::UnsupportedGeometry`] if the feature
/// has no vertex path to extract.
pub fn extract_vertices(
    store: &GraphicsStore,
    feature_index: usize,
) -> Result<Vec<Point2d>, WaymarkError> {
    let feature = store.get(feature_index).ok_or(WaymarkError::NotFound)?;

    let vertices = match feature.geometry() {
        Geom::Point(v) => vec![*v],
        Geom::Contour(contour) => contour.points.clone(),
        Geom::MultiContour(multi) => multi
            .contours()
            .first()
            .ok_or(WaymarkError::UnsupportedGeometry)?
            .points
            .clone(),
        Geom::Polygon(polygon) => polygon.outer_contour.points.clone(),
        Geom::MultiPolygon(multi) => multi
            .parts()
            .first()
            .ok_or(WaymarkError::UnsupportedGeometry)?
            .outer_contour
            .points
            .clone(),
        Geom::MultiPoint(_) => return Err(WaymarkError::UnsupportedGeometry),
    };

    Ok(vertices)
}
