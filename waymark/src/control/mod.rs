//! User interaction handling for the sketch pipeline.
//!
//! Interaction handling is done in two steps:
//! 1. The embedding application converts its UI events (button clicks, the
//!    drawing widget's completion callback, key releases) into the common
//!    [`SketchEvent`] enum.
//! 2. The events are given to a [`SketchEventHandler`]. The handler shipped
//!    with this crate is [`SketchEditor`], which owns the [`Toolbar`], the
//!    [`SketchSession`](crate::sketch::SketchSession) and the
//!    [`ReportPanel`](crate::report::ReportPanel) and runs the report
//!    pipeline in response to the events.
//!
//! All handling is synchronous: a new draw cannot begin until the previous
//! completion handling has returned.

mod sketch;
mod toolbar;

pub use sketch::SketchEditor;
pub use toolbar::{ToolButton, Toolbar};

use crate::sketch::{SketchFeature, ToolType};

/// User interaction event the sketch pipeline reacts to.
#[derive(Debug, Clone)]
pub enum SketchEvent {
    /// A toolbar button was pressed.
    ToolButtonPressed(ToolType),
    /// The drawing tool completed a shape.
    DrawCompleted(SketchFeature),
    /// A keyboard key was released.
    KeyUp(Key),
}

/// Keyboard key enum.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    /// The key that removes the feature under review.
    Delete,
    /// Any key the pipeline does not react to.
    Other,
}

/// Value returned by a [`SketchEventHandler`] to indicate the status of the
/// event.
pub enum EventPropagation {
    /// Event should be propagated to the next handler.
    Propagate,
    /// Event should not be propagated to the next handler.
    Stop,
}

/// Handler of sketch events.
pub trait SketchEventHandler {
    /// Handle the event.
    fn handle(&mut self, event: &SketchEvent) -> EventPropagation;
}

impl<T: FnMut(&SketchEvent) -> EventPropagation> SketchEventHandler for T {
    fn handle(&mut self, event: &SketchEvent) -> EventPropagation {
        self(event)
    }
}
