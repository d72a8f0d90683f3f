//! Report form building.
//!
//! When a sketch is finalized, its coordinate text is attached to a trail
//! report form. The forms are plain HTML fragments collected by a
//! [`ReportPanel`], which an embedder appends after its anchor element. The
//! submit button of a form is an inert stub; this crate neither stores nor
//! transmits the reports.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::CoordinateText;

/// Difficulty rating of a reported trail.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyClass {
    /// Walking on an established trail.
    Class1,
    /// Simple scrambling with occasional use of hands.
    Class2,
    /// Scrambling with frequent hand holds.
    Class3,
    /// Simple climbing, a fall could be fatal.
    Class4,
    /// Technical climbing.
    Class5,
    /// Difficulty not known.
    #[serde(rename = "unk")]
    Unknown,
}

impl DifficultyClass {
    /// All classes in the order the select control lists them.
    pub const ALL: [DifficultyClass; 6] = [
        DifficultyClass::Class1,
        DifficultyClass::Class2,
        DifficultyClass::Class3,
        DifficultyClass::Class4,
        DifficultyClass::Class5,
        DifficultyClass::Unknown,
    ];

    /// Form value of the class.
    pub fn value(&self) -> &'static str {
        match self {
            DifficultyClass::Class1 => "class1",
            DifficultyClass::Class2 => "class2",
            DifficultyClass::Class3 => "class3",
            DifficultyClass::Class4 => "class4",
            DifficultyClass::Class5 => "class5",
            DifficultyClass::Unknown => "unk",
        }
    }

    /// Label shown in the select control.
    pub fn label(&self) -> &'static str {
        match self {
            DifficultyClass::Class1 => "Class 1",
            DifficultyClass::Class2 => "Class 2",
            DifficultyClass::Class3 => "Class 3",
            DifficultyClass::Class4 => "Class 4",
            DifficultyClass::Class5 => "Class 5",
            DifficultyClass::Unknown => "unknown",
        }
    }
}

/// Rendered HTML fragment of one report form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMarkup(String);

impl FormMarkup {
    /// The markup as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builder of a single trail report form.
///
/// The form has four fields: a free-text trail name, a difficulty class
/// select, free-text notes, and a read-only coordinates field pre-populated
/// with the pair list of the captured sketch. No validation or submission
/// logic is attached.
pub struct ReportForm {
    coordinates: CoordinateText,
}

impl ReportForm {
    /// Creates a form builder for the given coordinate text.
    pub fn new(coordinates: &CoordinateText) -> Self {
        Self {
            coordinates: coordinates.clone(),
        }
    }

    /// Renders the form markup.
    pub fn render(&self) -> FormMarkup {
        let mut options = String::new();
        for class in DifficultyClass::ALL {
            options.push_str(&format!(
                "        <option name=\"report_type\" value=\"{}\">{}</option>\n",
                class.value(),
                class.label()
            ));
        }

        FormMarkup(format!(
            r#"<div class="report-menu">
  <form class="create-report-form">
    <div><label>Trail Name: </label><input placeholder="" name="report_name"></div>
    <div>
      <label>Difficulty: </label>
      <select name="report_type">
{options}      </select>
    </div>
    <div><label>Notes: </label><input placeholder="" name="report_notes"></div>
    <div><label>Coordinates: </label><input placeholder="" name="report_object" value="{coordinates}" readonly></div>
    <button type="submit" class="report-submit-btn">Submit</button>
  </form>
</div>"#,
            options = options,
            coordinates = self.coordinates.pair_list(),
        ))
    }
}

/// One entry of a [`ReportPanel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEntry {
    /// A generated report form.
    Form(FormMarkup),
    /// A visible pipeline error message.
    Notice(String),
}

/// The anchor collecting generated report forms.
///
/// Every finalized sketch appends a new form; earlier forms are kept, so
/// repeated completions accumulate multiple forms in the document. There is
/// no replacement policy. Pipeline errors are appended as notices so that a
/// failed capture is visible to the user.
#[derive(Debug, Default)]
pub struct ReportPanel {
    entries: Vec<PanelEntry>,
}

impl ReportPanel {
    /// Creates an empty panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a report form to the panel.
    pub fn append_form(&mut self, form: FormMarkup) {
        self.entries.push(PanelEntry::Form(form));
    }

    /// Appends a visible error notice to the panel.
    pub fn append_notice(&mut self, message: impl Into<String>) {
        self.entries.push(PanelEntry::Notice(message.into()));
    }

    /// All entries of the panel in the order they were appended.
    pub fn entries(&self) -> &[PanelEntry] {
        &self.entries
    }

    /// Iterates over the report forms in the panel.
    pub fn forms(&self) -> impl Iterator<Item = &FormMarkup> {
        self.entries.iter().filter_map(|entry| match entry {
            PanelEntry::Form(form) => Some(form),
            PanelEntry::Notice(_) => None,
        })
    }

    /// Renders the whole panel as one markup fragment.
    pub fn render(&self) -> String {
        let mut markup = String::new();
        for entry in &self.entries {
            match entry {
                PanelEntry::Form(form) => markup.push_str(form.as_str()),
                PanelEntry::Notice(message) => {
                    markup.push_str(&format!(
                        "<div class=\"report-notice\">{message}</div>"
                    ));
                }
            }
            markup.push('\n');
        }
        markup
    }

    /// Number of entries in the panel.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use waymark_types::cartesian::Point2d;
    use waymark_types::geo::{GeoPoint2d, NewGeoPoint, Projection};

    use super::*;
    use crate::format::format_coordinates;

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

    fn sample_text() -> CoordinateText {
        let vertices = vec![Point2d::new(-113.9, 48.6), Point2d::new(-113.8, 48.7)];
        format_coordinates(&vertices, &IdentityProjector).expect("formatting failed")
    }

    #[test]
    fn form_contains_all_fields() {
        let markup = ReportForm::new(&sample_text()).render();
        let html = markup.as_str();

        assert!(html.contains("name=\"report_name\""));
        assert!(html.contains("name=\"report_type\""));
        assert!(html.contains("name=\"report_notes\""));
        assert!(html.contains("name=\"report_object\""));
    }

    #[test]
    fn coordinates_field_is_read_only_and_prefilled() {
        let text = sample_text();
        let markup = ReportForm::new(&text).render();

        assert!(markup
            .as_str()
            .contains(&format!("value=\"{}\" readonly", text.pair_list())));
    }

    #[test]
    fn select_lists_every_difficulty_class() {
        let markup = ReportForm::new(&sample_text()).render();

        for class in DifficultyClass::ALL {
            assert!(markup
                .as_str()
                .contains(&format!("value=\"{}\"", class.value())));
        }
        assert_eq!(markup.as_str().matches("<option").count(), 6);
    }

    #[test]
    fn panel_accumulates_forms() {
        let mut panel = ReportPanel::new();
        panel.append_form(ReportForm::new(&sample_text()).render());
        panel.append_form(ReportForm::new(&sample_text()).render());

        assert_eq!(panel.len(), 2);
        assert_eq!(panel.forms().count(), 2);
        assert_eq!(panel.render().matches("create-report-form").count(), 2);
    }

    #[test]
    fn notices_show_up_in_rendered_panel() {
        let mut panel = ReportPanel::new();
        panel.append_notice("failed to capture sketch");

        assert!(panel.render().contains("failed to capture sketch"));
        assert_eq!(panel.forms().count(), 0);
    }
}
