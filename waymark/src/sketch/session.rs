use waymark_types::cartesian::Point2d;
use waymark_types::geo::{GeoPoint, Projection};

use crate::error::WaymarkError;
use crate::format::{format_coordinates, CoordinateText};
use crate::sketch::extract::extract_vertices;
use crate::sketch::{GraphicsStore, SketchFeature, ToolType};

/// Current stage of a drawing session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SketchState {
    /// No tool is active.
    Idle,
    /// The user is drawing a shape with the given tool.
    Drawing(ToolType),
    /// A newly drawn feature is in update mode awaiting finalize.
    Reviewing {
        /// Index of the reviewed feature in the session's store.
        feature_index: usize,
    },
}

impl Default for SketchState {
    fn default() -> Self {
        SketchState::Idle
    }
}

/// State machine of one sketch-and-report session.
///
/// The session owns the collection of captured features and the counter of
/// finalized reports. All mutation goes through the transition methods below;
/// there is no other way to change the session state.
///
/// The expected sequence for one feature is
/// [`start_drawing`](SketchSession::start_drawing) →
/// [`complete_drawing`](SketchSession::complete_drawing) →
/// [`finalize`](SketchSession::finalize). While the feature is under review
/// its vertices can be adjusted through
/// [`reviewed_feature_mut`](SketchSession::reviewed_feature_mut), or the
/// whole feature can be discarded with
/// [`delete_reviewing`](SketchSession::delete_reviewing).
#[derive(Debug, Default)]
pub struct SketchSession {
    features: GraphicsStore,
    state: SketchState,
    reports_finalized: u64,
}

impl SketchSession {
    /// Creates a new idle session with an empty feature collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of the session.
    pub fn state(&self) -> SketchState {
        self.state
    }

    /// The features captured so far.
    pub fn features(&self) -> &GraphicsStore {
        &self.features
    }

    /// Number of reports finalized during this session.
    ///
    /// The counter increments only when [`finalize`](SketchSession::finalize)
    /// succeeds; deleting a reviewed feature or a failed finalize leaves it
    /// untouched.
    pub fn reports_finalized(&self) -> u64 {
        self.reports_finalized
    }

    /// Activates a drawing tool.
    ///
    /// Allowed while idle or while drawing (switching tools restarts the
    /// draw). A feature under review must be finalized or deleted first;
    /// the caller is expected to do that on draw-start.
    pub fn start_drawing(&mut self, tool: ToolType) -> Result<(), WaymarkError> {
        if let SketchState::Reviewing { .. } = self.state {
            return Err(WaymarkError::Generic(
                "finalize or delete the reviewed feature before drawing".into(),
            ));
        }

        log::debug!("sketch tool activated: {}", tool.as_str());
        self.state = SketchState::Drawing(tool);
        Ok(())
    }

    /// Accepts a shape completed by the drawing tool.
    ///
    /// The feature is added to the collection and put into update mode.
    /// Returns the index of the feature in the collection.
    pub fn complete_drawing(&mut self, feature: SketchFeature) -> Result<usize, WaymarkError> {
        let SketchState::Drawing(tool) = self.state else {
            return Err(WaymarkError::Generic(
                "draw completion received while no tool was active".into(),
            ));
        };

        let feature_index = self.features.add(feature);
        log::debug!(
            "{} sketch completed, feature {} under review",
            tool.as_str(),
            feature_index
        );

        self.state = SketchState::Reviewing { feature_index };
        Ok(feature_index)
    }

    /// Mutable access to the feature under review for vertex adjustment.
    ///
    /// Returns `None` if no feature is under review.
    pub fn reviewed_feature_mut(&mut self) -> Option<&mut SketchFeature> {
        match self.state {
            SketchState::Reviewing { feature_index } => self.features.get_mut(feature_index),
            _ => None,
        }
    }

    /// Finalizes the feature under review and returns its coordinate text.
    ///
    /// This is a synchronous run of the whole report pipeline: the vertices
    /// of the reviewed feature are extracted, projected with `projection` and
    /// rendered into [`CoordinateText`]. On success the report counter
    /// increments and the session returns to idle, with the feature kept in
    /// the collection.
    ///
    /// On failure the session also returns to idle, but the unreportable
    /// feature is removed from the collection and the counter is left
    /// untouched, so the collection always matches the reported set.
    pub fn finalize<Proj>(&mut self, projection: &Proj) -> Result<CoordinateText, WaymarkError>
    where
        Proj: Projection<InPoint = Point2d> + ?Sized,
        Proj::OutPoint: GeoPoint<Num = f64>,
    {
        let SketchState::Reviewing { feature_index } = self.state else {
            return Err(WaymarkError::Generic("no feature is under review".into()));
        };

        let result = extract_vertices(&self.features, feature_index)
            .and_then(|vertices| format_coordinates(&vertices, projection));

        match result {
            Ok(text) => {
                self.reports_finalized += 1;
                self.state = SketchState::Idle;
                log::debug!(
                    "feature {} finalized as report {}",
                    feature_index,
                    self.reports_finalized
                );
                Ok(text)
            }
            Err(error) => {
                self.features.remove(feature_index);
                self.state = SketchState::Idle;
                log::warn!("failed to finalize feature {feature_index}: {error}");
                Err(error)
            }
        }
    }

    /// Removes the feature under review from the collection (the Delete-key
    /// path) and returns it.
    ///
    /// The session returns to idle and the report counter does not change.
    /// Does nothing if no feature is under review.
    pub fn delete_reviewing(&mut self) -> Option<SketchFeature> {
        let SketchState::Reviewing { feature_index } = self.state else {
            return None;
        };

        self.state = SketchState::Idle;
        let removed = self.features.remove(feature_index);
        if removed.is_some() {
            log::debug!("reviewed feature {feature_index} deleted");
        }
        removed
    }

    /// Cancels the active tool without touching the feature collection or
    /// the report counter.
    pub fn reset(&mut self) {
        self.state = SketchState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use waymark_types::geo::{GeoPoint2d, NewGeoPoint};
    use waymark_types::Geom;

    use super::*;

    struct IdentityProjector;

    impl Projection for IdentityProjector {
        type InPoint = Point2d;
        type OutPoint = GeoPoint2d;

        fn project(&self, input: &Point2d) -> Option<GeoPoint2d> {
            Some(GeoPoint2d::latlon(input.y, input.x))
        }

        fn unproject(&self, input: &GeoPoint2d) -> Option<Point2d> {
            Some(Point2d::new(input.lon(), input.lat()))
        }
    }

    struct FailingProjector;

    impl Projection for FailingProjector {
        type InPoint = Point2d;
        type OutPoint = GeoPoint2d;

        fn project(&self, _input: &Point2d) -> Option<GeoPoint2d> {
            None
        }

        fn unproject(&self, _input: &GeoPoint2d) -> Option<Point2d> {
            None
        }
    }

    fn line_feature() -> SketchFeature {
        SketchFeature::line(vec![Point2d::new(0.0, 0.0), Point2d::new(1.0, 1.0)])
    }

    #[test]
    fn full_cycle_increments_counter_and_keeps_feature() {
        let mut session = SketchSession::new();

        session.start_drawing(ToolType::Line).expect("transition failed");
        assert_eq!(session.state(), SketchState::Drawing(ToolType::Line));

        let index = session
            .complete_drawing(line_feature())
            .expect("transition failed");
        assert_eq!(session.state(), SketchState::Reviewing { feature_index: index });

        let text = session.finalize(&IdentityProjector).expect("finalize failed");
        assert_eq!(text.pair_list(), "0 0, 1 1");
        assert_eq!(session.state(), SketchState::Idle);
        assert_eq!(session.reports_finalized(), 1);
        assert_eq!(session.features().len(), 1);
    }

    #[test]
    fn delete_does_not_increment_counter() {
        let mut session = SketchSession::new();

        session.start_drawing(ToolType::Line).expect("transition failed");
        session.complete_drawing(line_feature()).expect("transition failed");

        let removed = session.delete_reviewing();
        assert!(removed.is_some());
        assert_eq!(session.state(), SketchState::Idle);
        assert_eq!(session.reports_finalized(), 0);
        assert!(session.features().is_empty());

        // A second delete with nothing under review is a no-op.
        assert!(session.delete_reviewing().is_none());
    }

    #[test]
    fn failed_finalize_rolls_back_to_idle() {
        let mut session = SketchSession::new();

        session.start_drawing(ToolType::Line).expect("transition failed");
        session.complete_drawing(line_feature()).expect("transition failed");

        assert_matches!(
            session.finalize(&FailingProjector),
            Err(WaymarkError::Projection)
        );
        assert_eq!(session.state(), SketchState::Idle);
        assert_eq!(session.reports_finalized(), 0);
        assert!(session.features().is_empty());
    }

    #[test]
    fn completion_without_active_tool_is_rejected() {
        let mut session = SketchSession::new();
        assert_matches!(
            session.complete_drawing(line_feature()),
            Err(WaymarkError::Generic(_))
        );
        assert!(session.features().is_empty());
    }

    #[test]
    fn drawing_cannot_start_over_a_review() {
        let mut session = SketchSession::new();

        session.start_drawing(ToolType::Polygon).expect("transition failed");
        session
            .complete_drawing(SketchFeature::polygon(vec![
                Point2d::new(0.0, 0.0),
                Point2d::new(1.0, 0.0),
                Point2d::new(1.0, 1.0),
            ]))
            .expect("transition failed");

        assert_matches!(
            session.start_drawing(ToolType::Point),
            Err(WaymarkError::Generic(_))
        );
        assert_matches!(session.state(), SketchState::Reviewing { .. });
    }

    #[test]
    fn switching_tools_while_drawing_restarts_the_draw() {
        let mut session = SketchSession::new();

        session.start_drawing(ToolType::Line).expect("transition failed");
        session.start_drawing(ToolType::Point).expect("transition failed");
        assert_eq!(session.state(), SketchState::Drawing(ToolType::Point));
    }

    #[test]
    fn reviewed_vertices_can_be_adjusted_before_finalize() {
        let mut session = SketchSession::new();

        session.start_drawing(ToolType::Line).expect("transition failed");
        session.complete_drawing(line_feature()).expect("transition failed");

        let feature = session.reviewed_feature_mut().expect("no feature");
        if let Geom::Contour(contour) = feature.geometry_mut() {
            contour.points[1] = Point2d::new(2.0, 3.0);
        }

        let text = session.finalize(&IdentityProjector).expect("finalize failed");
        assert_eq!(text.pair_list(), "0 0, 2 3");
    }

    #[test]
    fn reset_keeps_features_and_counter() {
        let mut session = SketchSession::new();

        session.start_drawing(ToolType::Line).expect("transition failed");
        session.complete_drawing(line_feature()).expect("transition failed");
        session.finalize(&IdentityProjector).expect("finalize failed");

        session.start_drawing(ToolType::Point).expect("transition failed");
        session.reset();

        assert_eq!(session.state(), SketchState::Idle);
        assert_eq!(session.reports_finalized(), 1);
        assert_eq!(session.features().len(), 1);
    }
}
