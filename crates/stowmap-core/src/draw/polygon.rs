use serde::Serialize;
use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{SvgNode, StrokeDefinition, with_title},
    geometry::{Bounds, Point},
};

/// A closed polygon given by its vertices in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    points: Vec<Point>,
    fill: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    stroke: Option<StrokeDefinition>,
    tooltip: String,
}

impl Polygon {
    pub fn new(points: Vec<Point>, fill: Color) -> Self {
        Self {
            points,
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

    pub fn points(&self) -> &[Point] {
        &self.points
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

    /// Bounding box of the vertices; a polygon without vertices has empty bounds.
    pub fn bounds(&self) -> Bounds {
        Bounds::enclosing(self.points.iter().copied()).unwrap_or_default()
    }

    pub fn to_svg(&self) -> SvgNode {
        let points = self
            .points
            .iter()
            .map(|point| format!("{},{}", point.x(), point.y()))
            .collect::<Vec<_>>()
            .join(" ");

        let mut polygon = svg_element::Polygon::new()
            .set("points", points)
            .set("fill", &self.fill);

        if let Some(stroke) = &self.stroke {
            polygon = crate::apply_stroke!(polygon, stroke);
        }

        with_title(polygon, &self.tooltip)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn arrow_head() -> Polygon {
        Polygon::new(
            vec![
                Point::new(225.0, 90.0),
                Point::new(275.0, 115.0),
                Point::new(225.0, 140.0),
            ],
            Color::new("orange").unwrap(),
        )
    }

    #[test]
    fn test_polygon_bounds() {
        let bounds = arrow_head().bounds();
        assert_approx_eq!(f32, bounds.min_x(), 225.0);
        assert_approx_eq!(f32, bounds.max_x(), 275.0);
        assert_approx_eq!(f32, bounds.min_y(), 90.0);
        assert_approx_eq!(f32, bounds.max_y(), 140.0);
    }

    #[test]
    fn test_polygon_to_svg_points() {
        let rendered = arrow_head().to_svg().to_string();
        assert!(rendered.starts_with("<polygon"));
        assert!(rendered.contains("points=\"225,90 275,115 225,140\""));
    }

    #[test]
    fn test_empty_polygon_bounds() {
        let polygon = Polygon::new(Vec::new(), Color::default());
        assert_eq!(polygon.bounds(), Bounds::default());
    }
}
