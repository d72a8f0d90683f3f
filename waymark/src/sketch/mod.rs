//! Sketch capture: drawing tools, captured features and the session state
//! machine.
//!
//! A sketch goes through the following steps:
//! 1. The user activates a drawing tool, putting the
//!    [`SketchSession`] into the drawing state.
//! 2. The external drawing widget reports the finished shape as a
//!    [`SketchFeature`], which the session adds to its [`GraphicsStore`] and
//!    puts into review (update) mode.
//! 3. On finalize the session runs the report pipeline:
//!    [`extract_vertices`] takes the ordered vertex list of the reviewed
//!    feature, and [`format_coordinates`](crate::format::format_coordinates)
//!    converts it to geographic coordinate text for the report form.

mod extract;
mod session;
mod store;

pub use extract::extract_vertices;
pub use session::{SketchSession, SketchState};
pub use store::GraphicsStore;

use serde::{Deserialize, Serialize};
use waymark_types::cartesian::Point2d;
use waymark_types::{ClosedContour, Contour, Geom, Polygon};

/// Kind of geometry a drawing tool produces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    /// A single point of interest.
    Point,
    /// An open line (a route).
    Line,
    /// A closed polygon (a footprint).
    Polygon,
}

impl ToolType {
    /// Name of the tool as used in the buttons' data attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolType::Point => "point",
            ToolType::Line => "line",
            ToolType::Polygon => "polygon",
        }
    }
}

/// A shape captured from the drawing tool, in the map's native projected
/// coordinates.
///
/// The vertices are immutable once captured, except through
/// [`SketchSession::reviewed_feature_mut`] while the feature is in update
/// mode.
#[derive(Debug, Clone)]
pub struct SketchFeature {
    geometry: Geom<Point2d>,
    tool: ToolType,
}

impl SketchFeature {
    /// Creates a feature from an already built geometry.
    pub fn new(geometry: Geom<Point2d>, tool: ToolType) -> Self {
        Self { geometry, tool }
    }

    /// Creates a point feature.
    pub fn point(vertex: Point2d) -> Self {
        Self {
            geometry: Geom::Point(vertex),
            tool: ToolType::Point,
        }
    }

    /// Creates a line feature from the vertices of its path.
    pub fn line(vertices: Vec<Point2d>) -> Self {
        Self {
            geometry: Geom::Contour(Contour::open(vertices)),
            tool: ToolType::Line,
        }
    }

    /// Creates a polygon feature from the vertices of its outer ring.
    pub fn polygon(vertices: Vec<Point2d>) -> Self {
        Self {
            geometry: Geom::Polygon(Polygon::new(ClosedContour::new(vertices))),
            tool: ToolType::Polygon,
        }
    }

    /// Geometry of the feature.
    pub fn geometry(&self) -> &Geom<Point2d> {
        &self.geometry
    }

    /// Mutable access to the geometry for vertex adjustment.
    pub fn geometry_mut(&mut self) -> &mut Geom<Point2d> {
        &mut self.geometry
    }

    /// The tool that produced the feature.
    pub fn tool(&self) -> ToolType {
        self.tool
    }
}
