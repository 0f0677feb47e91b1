use serde::Serialize;
use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{SvgNode, StrokeDefinition, with_title},
    geometry::{Bounds, Point, Size},
};

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rectangle {
    position: Point,
    size: Size,
    fill: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    stroke: Option<StrokeDefinition>,
    tooltip: String,
}

impl Rectangle {
    pub fn new(position: Point, size: Size, fill: Color) -> Self {
        Self {
            position,
            size,
            fill,
            stroke: None,
            tooltip: String::new(),
        }
    }

    /// Sets the border stroke (builder style).
    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the initial tooltip (builder style).
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.width()
    }

    pub fn height(&self) -> f32 {
        self.size.height()
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub(super) fn set_tooltip(&mut self, tooltip: String) {
        self.tooltip = tooltip;
    }

    pub fn bounds(&self) -> Bounds {
        self.position.to_bounds(self.size)
    }

    pub fn to_svg(&self) -> SvgNode {
        let mut rect = svg_element::Rectangle::new()
            .set("x", self.position.x())
            .set("y", self.position.y())
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("fill", &self.fill);

        if let Some(stroke) = &self.stroke {
            rect = crate::apply_stroke!(rect, stroke);
        }

        with_title(rect, &self.tooltip)
    }
}
