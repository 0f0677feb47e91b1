//! Text labels.
//!
//! Labels are not measured: their bounds collapse to the anchor point, which
//! the layout always places inside an enclosing block.

use serde::Serialize;
use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{SvgNode, with_title},
    geometry::{Bounds, Point, Size},
};

/// Horizontal alignment of a label relative to its anchor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    /// Returns the SVG text-anchor value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// A single line of text positioned at an anchor point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLabel {
    position: Point,
    text: String,
    color: Color,
    font_size: u16,
    anchor: TextAnchor,
    tooltip: String,
}

impl TextLabel {
    pub fn new(position: Point, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
            color: Color::default(),
            font_size: 15,
            anchor: TextAnchor::default(),
            tooltip: String::new(),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_font_size(mut self, font_size: u16) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub(super) fn set_tooltip(&mut self, tooltip: String) {
        self.tooltip = tooltip;
    }

    pub fn bounds(&self) -> Bounds {
        self.position.to_bounds(Size::default())
    }

    pub fn to_svg(&self) -> SvgNode {
        let text = svg_element::Text::new("")
            .set("x", self.position.x())
            .set("y", self.position.y())
            .set("fill", &self.color)
            .set("font-size", self.font_size)
            .set("text-anchor", self.anchor.to_svg_value())
            .add(SvgText::new(self.text.as_str()));

        with_title(text, &self.tooltip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_defaults() {
        let label = TextLabel::new(Point::new(350.0, 225.0), "JoeDrive0");
        assert_eq!(label.text(), "JoeDrive0");
        assert_eq!(label.anchor(), TextAnchor::Start);
        assert_eq!(label.color(), Color::default());
        assert!(label.bounds().to_size().is_zero());
    }

    #[test]
    fn test_label_to_svg_centered() {
        let label = TextLabel::new(Point::new(350.0, 225.0), "JoeDrive0")
            .with_font_size(20)
            .with_anchor(TextAnchor::Middle);
        let rendered = label.to_svg().to_string();

        assert!(rendered.starts_with("<text"));
        assert!(rendered.contains("text-anchor=\"middle\""));
        assert!(rendered.contains("font-size=\"20\""));
        assert!(rendered.contains("JoeDrive0"));
    }
}
