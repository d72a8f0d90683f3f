//! Line symbol configuration for the external renderer.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::report::DifficultyClass;

/// Stroke style of a line symbol.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Continuous stroke.
    Solid,
    /// Dotted stroke.
    Dot,
}

/// A simple line symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSymbol {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
    /// Stroke style.
    pub style: LineStyle,
}

impl LineSymbol {
    /// Creates a solid line symbol.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: LineStyle::Solid,
        }
    }

    /// Symbol used to render trails of the given difficulty class.
    pub fn for_class(class: DifficultyClass) -> Self {
        let color = match class {
            DifficultyClass::Class2 => Color::YELLOW,
            DifficultyClass::Class3 => Color::ORANGE,
            _ => Color::GREEN,
        };
        Self::new(color, 3.0)
    }
}

/// Symbol entry of a [`UniqueValueRenderer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniqueValueInfo {
    /// Attribute value this entry matches.
    pub value: String,
    /// Symbol used for matching features.
    pub symbol: LineSymbol,
    /// Label used in the legend.
    pub label: String,
}

/// Renderer configuration that picks a symbol by the value of a feature
/// attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniqueValueRenderer {
    /// Attribute field the symbol is selected by.
    pub field: String,
    /// Symbol used for features not matching any listed value.
    pub default_symbol: LineSymbol,
    /// Legend label for non-matching features.
    pub default_label: String,
    /// The value-to-symbol entries.
    pub unique_values: Vec<UniqueValueInfo>,
}

impl UniqueValueRenderer {
    /// Renderer for trail overlays, keyed on the trail's difficulty class
    /// field.
    pub fn trail_classes() -> Self {
        let classes = [
            DifficultyClass::Class1,
            DifficultyClass::Class2,
            DifficultyClass::Class3,
        ];
        Self {
            field: "CLASS".into(),
            default_symbol: LineSymbol::for_class(DifficultyClass::Class1),
            default_label: "Other trails".into(),
            unique_values: classes
                .iter()
                .enumerate()
                .map(|(index, class)| UniqueValueInfo {
                    value: (index + 1).to_string(),
                    symbol: LineSymbol::for_class(*class),
                    label: class.label().into(),
                })
                .collect(),
        }
    }

    /// Returns the symbol for the given attribute value.
    pub fn symbol_for(&self, value: &str) -> &LineSymbol {
        self.unique_values
            .iter()
            .find(|info| info.value == value)
            .map(|info| &info.symbol)
            .unwrap_or(&self.default_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_symbols_differ_by_color() {
        assert_eq!(
            LineSymbol::for_class(DifficultyClass::Class1).color,
            Color::GREEN
        );
        assert_eq!(
            LineSymbol::for_class(DifficultyClass::Class2).color,
            Color::YELLOW
        );
        assert_eq!(
            LineSymbol::for_class(DifficultyClass::Class3).color,
            Color::ORANGE
        );
    }

    #[test]
    fn unknown_value_falls_back_to_default_symbol() {
        let renderer = UniqueValueRenderer::trail_classes();

        assert_eq!(renderer.symbol_for("2").color, Color::YELLOW);
        assert_eq!(renderer.symbol_for("17"), &renderer.default_symbol);
    }
}
