//! Waymark is a map-sketching and trail-report capture toolkit. It takes the
//! shapes a user draws on a map, converts their vertices from the map's
//! projected coordinate space into geographic coordinates, serializes them
//! into report-ready text, and builds the report forms that collect them.
//!
//! # Main components
//!
//! The pipeline runs through a handful of small parts:
//!
//! * [`SketchSession`](sketch::SketchSession) is the state machine of one
//!   drawing session. It owns the [`GraphicsStore`](sketch::GraphicsStore)
//!   with the captured [`SketchFeature`](sketch::SketchFeature)s and the
//!   report counter, and funnels every mutation through explicit transition
//!   functions.
//! * [`extract_vertices`](sketch::extract_vertices) pulls the ordered vertex
//!   list out of a captured feature.
//! * [`format_coordinates`](format::format_coordinates) projects the vertices
//!   to geographic coordinates and renders the two textual forms carried by
//!   [`CoordinateText`](format::CoordinateText).
//! * [`ReportForm`](report::ReportForm) and [`ReportPanel`](report::ReportPanel)
//!   turn the coordinate text into the report form markup appended to the
//!   page.
//!
//! None of the above deals with user interactions. To wire the pipeline to an
//! actual UI you would also need
//!
//! * [`Toolbar`](control::Toolbar) keeping the mutual exclusion of the tool
//!   buttons, and
//! * [`SketchEditor`](control::SketchEditor), the event handler that runs the
//!   whole sequence in response to [`SketchEvent`](control::SketchEvent)s.
//!
//! The [`parks`] module holds the asynchronous park-directory client and the
//! combobox model it populates, and [`scene`] holds the configuration handed
//! to the external map renderer. Rendering itself, spatial indexing and
//! persistence are out of scope of this crate.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

mod color;
pub mod control;
pub mod error;
pub mod format;
pub mod parks;
pub mod report;
pub mod scene;
pub mod sketch;
mod symbol;

pub use color::Color;
pub use error::WaymarkError;
pub use symbol::{LineStyle, LineSymbol, UniqueValueInfo, UniqueValueRenderer};

// Reexport waymark_types
pub use waymark_types;
