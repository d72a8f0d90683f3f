use crate::sketch::ToolType;

/// A toolbar button that activates a drawing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolButton {
    tool: ToolType,
    is_active: bool,
}

impl ToolButton {
    /// The tool this button activates.
    pub fn tool(&self) -> ToolType {
        self.tool
    }

    /// Whether the button currently carries the active visual state.
    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

/// The sketch toolbar, holding one button per drawing tool.
///
/// At most one button is active at any time; activating a button clears the
/// active state of every other one.
#[derive(Debug, Clone, Default)]
pub struct Toolbar {
    buttons: Vec<ToolButton>,
}

impl Toolbar {
    /// Creates a toolbar with a button for each of the given tools.
    pub fn new(tools: impl IntoIterator<Item = ToolType>) -> Self {
        Self {
            buttons: tools
                .into_iter()
                .map(|tool| ToolButton {
                    tool,
                    is_active: false,
                })
                .collect(),
        }
    }

    /// Creates the standard toolbar with point, line and polygon buttons.
    pub fn standard() -> Self {
        Self::new([ToolType::Point, ToolType::Line, ToolType::Polygon])
    }

    /// Activates the button of the given tool, deactivating all others.
    ///
    /// Returns the tool if the toolbar has a button for it, so the caller can
    /// start drawing with it. Returns `None` (leaving every button inactive)
    /// if there is no such button.
    pub fn activate(&mut self, tool: ToolType) -> Option<ToolType> {
        self.deactivate_all();

        let button = self.buttons.iter_mut().find(|b| b.tool == tool)?;
        button.is_active = true;
        Some(button.tool)
    }

    /// Clears the active state of every button.
    ///
    /// Calling this on an already-inactive toolbar is a no-op.
    pub fn deactivate_all(&mut self) {
        for button in &mut self.buttons {
            button.is_active = false;
        }
    }

    /// The tool of the currently active button, if any.
    pub fn active(&self) -> Option<ToolType> {
        self.buttons
            .iter()
            .find(|b| b.is_active)
            .map(|b| b.tool)
    }

    /// The buttons of the toolbar in display order.
    pub fn buttons(&self) -> &[ToolButton] {
        &self.buttons
    }
}
