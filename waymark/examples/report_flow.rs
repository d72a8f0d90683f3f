//! This example runs the whole sketch-capture-and-report pipeline without a
//! map UI: it presses a toolbar button, feeds a completed line sketch to the
//! editor and prints the generated report form.

use waymark::control::{SketchEditor, SketchEvent, SketchEventHandler};
use waymark::sketch::{SketchFeature, ToolType};
use waymark::waymark_types::cartesian::Point2d;

fn main() {
    env_logger::init();

    let mut editor = SketchEditor::new();

    editor.handle(&SketchEvent::ToolButtonPressed(ToolType::Line));
    println!(
        "active tool: {:?}, session state: {:?}",
        editor.toolbar().active(),
        editor.session().state()
    );

    // A short trail segment in web-mercator meters, as the drawing widget
    // would hand it over.
    let trail = SketchFeature::line(vec![
        Point2d::new(-12_681_200.0, 6_193_300.0),
        Point2d::new(-12_680_450.0, 6_194_150.0),
        Point2d::new(-12_679_800.0, 6_194_900.0),
    ]);
    editor.handle(&SketchEvent::DrawCompleted(trail));

    println!(
        "reports finalized: {}",
        editor.session().reports_finalized()
    );
    println!("{}", editor.panel().render());
}
