use waymark_types::cartesian::Point2d;
use waymark_types::geo::{GeoPoint2d, InvertedProjection, Projection, WebMercator};

use crate::control::{EventPropagation, Key, SketchEvent, SketchEventHandler, Toolbar};
use crate::error::WaymarkError;
use crate::report::{ReportForm, ReportPanel};
use crate::sketch::{SketchFeature, SketchSession, SketchState, ToolType};

/// Projection from the map's native coordinates to geographic coordinates.
pub type MapProjection = dyn Projection<InPoint = Point2d, OutPoint = GeoPoint2d>;

/// Event handler wiring the toolbar, the drawing session and the report
/// panel together.
///
/// On a tool button press the editor clears the toolbar, marks the pressed
/// button active and starts drawing. When the drawing tool reports a
/// completed shape, the editor puts the buttons away and immediately runs
/// the report pipeline: the new feature's vertices are extracted, projected
/// and attached to a fresh report form appended to the panel. The whole
/// sequence is synchronous.
///
/// If extraction, projection or formatting fails, the session is rolled back
/// to idle, the toolbar stays inactive, and the error is appended to the
/// panel as a visible notice; no report counter increment happens.
pub struct SketchEditor {
    toolbar: Toolbar,
    session: SketchSession,
    panel: ReportPanel,
    projection: Box<MapProjection>,
}

impl Default for SketchEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl SketchEditor {
    /// Creates an editor for a Web Mercator map with the standard toolbar.
    pub fn new() -> Self {
        let projection: WebMercator<GeoPoint2d, Point2d> = WebMercator::default();
        Self::with_projection(Box::new(InvertedProjection::new(projection)))
    }

    /// Creates an editor using the given map-to-geographic projection.
    pub fn with_projection(projection: Box<MapProjection>) -> Self {
        Self {
            toolbar: Toolbar::standard(),
            session: SketchSession::new(),
            panel: ReportPanel::new(),
            projection,
        }
    }

    /// The toolbar of the editor.
    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    /// The drawing session of the editor.
    pub fn session(&self) -> &SketchSession {
        &self.session
    }

    /// The report panel the generated forms are appended to.
    pub fn panel(&self) -> &ReportPanel {
        &self.panel
    }

    fn on_tool_button(&mut self, tool: ToolType) -> Result<(), WaymarkError> {
        // A draw-start is the explicit finalize of a pending review.
        if let SketchState::Reviewing { .. } = self.session.state() {
            self.finalize_review()?;
        }

        let Some(tool) = self.toolbar.activate(tool) else {
            return Err(WaymarkError::NotFound);
        };

        self.session.start_drawing(tool)
    }

    fn on_draw_completed(&mut self, feature: SketchFeature) -> Result<(), WaymarkError> {
        self.session.complete_drawing(feature)?;
        self.toolbar.deactivate_all();
        self.finalize_review()
    }

    fn on_key_up(&mut self, key: Key) {
        if key == Key::Delete {
            if let Some(feature) = self.session.delete_reviewing() {
                log::debug!("deleted reviewed {} sketch", feature.tool().as_str());
            }
        }
    }

    fn finalize_review(&mut self) -> Result<(), WaymarkError> {
        match self.session.finalize(self.projection.as_ref()) {
            Ok(text) => {
                log::info!("captured coordinates: {}", text.pair_list());
                self.panel.append_form(ReportForm::new(&text).render());
                Ok(())
            }
            Err(error) => {
                self.panel
                    .append_notice(format!("failed to capture sketch: {error}"));
                Err(error)
            }
        }
    }
}

impl SketchEventHandler for SketchEditor {
    fn handle(&mut self, event: &SketchEvent) -> EventPropagation {
        match event {
            SketchEvent::ToolButtonPressed(tool) => {
                if let Err(error) = self.on_tool_button(*tool) {
                    log::warn!("failed to start drawing: {error}");
                }
                EventPropagation::Stop
            }
            SketchEvent::DrawCompleted(feature) => {
                if let Err(error) = self.on_draw_completed(feature.clone()) {
                    log::warn!("failed to report completed sketch: {error}");
                }
                EventPropagation::Stop
            }
            SketchEvent::KeyUp(Key::Delete) => {
                self.on_key_up(Key::Delete);
                EventPropagation::Stop
            }
            SketchEvent::KeyUp(_) => EventPropagation::Propagate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::PanelEntry;

    struct IdentityProjector;

    impl Projection for IdentityProjector {
        type InPoint = Point2d;
        type OutPoint = GeoPoint2d;

        fn project(&self, input: &Point2d) -> Option<GeoPoint2d> {
            use waymark_types::geo::NewGeoPoint;
            Some(GeoPoint2d::latlon(input.y, input.x))
        }

        fn unproject(&self, input: &GeoPoint2d) -> Option<Point2d> {
            use waymark_types::geo::GeoPoint;
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

    fn editor() -> SketchEditor {
        SketchEditor::with_projection(Box::new(IdentityProjector))
    }

    fn line_event() -> SketchEvent {
        SketchEvent::DrawCompleted(SketchFeature::line(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 1.0),
        ]))
    }

    #[test]
    fn button_press_activates_tool_and_starts_drawing() {
        let mut editor = editor();

        editor.handle(&SketchEvent::ToolButtonPressed(ToolType::Line));

        assert_eq!(editor.toolbar().active(), Some(ToolType::Line));
        assert_eq!(
            editor.session().state(),
            SketchState::Drawing(ToolType::Line)
        );
    }

    #[test]
    fn completion_builds_form_and_puts_buttons_away() {
        let mut editor = editor();

        editor.handle(&SketchEvent::ToolButtonPressed(ToolType::Line));
        editor.handle(&line_event());

        assert_eq!(editor.toolbar().active(), None);
        assert_eq!(editor.session().state(), SketchState::Idle);
        assert_eq!(editor.session().reports_finalized(), 1);

        let forms: Vec<_> = editor.panel().forms().collect();
        assert_eq!(forms.len(), 1);
        assert!(forms[0].as_str().contains("value=\"0 0, 1 1\""));
    }

    #[test]
    fn repeated_completions_accumulate_forms() {
        let mut editor = editor();

        for _ in 0..2 {
            editor.handle(&SketchEvent::ToolButtonPressed(ToolType::Line));
            editor.handle(&line_event());
        }

        assert_eq!(editor.panel().forms().count(), 2);
        assert_eq!(editor.session().reports_finalized(), 2);
        assert_eq!(editor.session().features().len(), 2);
    }

    #[test]
    fn projection_failure_surfaces_notice_and_rolls_back() {
        let mut editor = SketchEditor::with_projection(Box::new(FailingProjector));

        editor.handle(&SketchEvent::ToolButtonPressed(ToolType::Line));
        editor.handle(&line_event());

        assert_eq!(editor.session().state(), SketchState::Idle);
        assert_eq!(editor.session().reports_finalized(), 0);
        assert!(editor.session().features().is_empty());
        assert_eq!(editor.toolbar().active(), None);

        assert!(matches!(
            editor.panel().entries(),
            [PanelEntry::Notice(message)] if message.contains("failed to capture sketch")
        ));
    }

    #[test]
    fn delete_key_outside_review_is_ignored() {
        let mut editor = editor();

        editor.handle(&SketchEvent::ToolButtonPressed(ToolType::Line));
        editor.handle(&line_event());
        editor.handle(&SketchEvent::KeyUp(Key::Delete));

        assert_eq!(editor.session().features().len(), 1);
        assert_eq!(editor.session().reports_finalized(), 1);
    }

    #[test]
    fn other_keys_propagate() {
        let mut editor = editor();
        assert!(matches!(
            editor.handle(&SketchEvent::KeyUp(Key::Other)),
            EventPropagation::Propagate
        ));
    }
}
