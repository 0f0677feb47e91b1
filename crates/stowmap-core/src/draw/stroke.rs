//! Stroke definitions for shape borders.
//!
//! | Rust Property | SVG Attribute |
//! |--------------|---------------|
//! | `color` | `stroke`, `stroke-opacity` |
//! | `width` | `stroke-width` |

use serde::Serialize;

use crate::color::Color;

/// A solid stroke for rendering borders.
///
/// # Examples
///
/// ```
/// use stowmap_core::draw::StrokeDefinition;
/// use stowmap_core::color::Color;
///
/// let stroke = StrokeDefinition::solid(Color::new("black").unwrap(), 2.0);
/// assert_eq!(stroke.width(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// # Examples
///
/// ```
/// use stowmap_core::draw::StrokeDefinition;
/// use stowmap_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::solid(Color::new("black").unwrap(), 2.0);
/// let polygon = svg_element::Polygon::new().set("points", "0,0 10,5 0,10");
///
/// let polygon = stowmap_core::apply_stroke!(polygon, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    };
}
