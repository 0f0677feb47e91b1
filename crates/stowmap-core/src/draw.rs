//! Drawable primitives for storage diagrams.
//!
//! The layout produces a flat, ordered sequence of [`Drawable`] values. Each
//! variant carries its own geometry and style and knows how to render itself
//! as an SVG node, so any rendering surface can paint them in order.
//!
//! # Overview
//!
//! - [`Rectangle`] - location blocks, folders, files and arrow shafts
//! - [`Polygon`] - arrow heads
//! - [`TextLabel`] - location names
//! - [`DrawableId`] - stable identity of a drawable inside its diagram
//!
//! Geometry and style are fixed at construction. The tooltip is the one field
//! that may change afterwards, through [`Drawable::set_tooltip`].

mod polygon;
mod rectangle;
mod stroke;
mod text;

pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use stroke::StrokeDefinition;
pub use text::{TextAnchor, TextLabel};

use std::fmt;

use serde::Serialize;
use svg::Node as _;

use crate::geometry::{Bounds, Point};

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Identity of a drawable: its index in the diagram's paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DrawableId(usize);

impl DrawableId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the index of the drawable in paint order
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for DrawableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A positioned visual primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Drawable {
    Rectangle(Rectangle),
    Polygon(Polygon),
    TextLabel(TextLabel),
}

impl Drawable {
    /// Returns the anchor position of the drawable.
    ///
    /// Top-left corner for rectangles, first vertex for polygons and the
    /// text anchor for labels.
    pub fn position(&self) -> Point {
        match self {
            Self::Rectangle(rect) => rect.position(),
            Self::Polygon(polygon) => polygon.points().first().copied().unwrap_or_default(),
            Self::TextLabel(label) => label.position(),
        }
    }

    /// Returns the area covered by the drawable
    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Rectangle(rect) => rect.bounds(),
            Self::Polygon(polygon) => polygon.bounds(),
            Self::TextLabel(label) => label.bounds(),
        }
    }

    /// Returns the current tooltip text
    pub fn tooltip(&self) -> &str {
        match self {
            Self::Rectangle(rect) => rect.tooltip(),
            Self::Polygon(polygon) => polygon.tooltip(),
            Self::TextLabel(label) => label.tooltip(),
        }
    }

    /// Replaces the tooltip text. Geometry and style are left untouched.
    pub fn set_tooltip(&mut self, tooltip: impl Into<String>) {
        let tooltip = tooltip.into();
        match self {
            Self::Rectangle(rect) => rect.set_tooltip(tooltip),
            Self::Polygon(polygon) => polygon.set_tooltip(tooltip),
            Self::TextLabel(label) => label.set_tooltip(tooltip),
        }
    }

    /// Renders the drawable to a single SVG node
    pub fn to_svg(&self) -> SvgNode {
        match self {
            Self::Rectangle(rect) => rect.to_svg(),
            Self::Polygon(polygon) => polygon.to_svg(),
            Self::TextLabel(label) => label.to_svg(),
        }
    }
}

impl From<Rectangle> for Drawable {
    fn from(rect: Rectangle) -> Self {
        Self::Rectangle(rect)
    }
}

impl From<Polygon> for Drawable {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}

impl From<TextLabel> for Drawable {
    fn from(label: TextLabel) -> Self {
        Self::TextLabel(label)
    }
}

/// Wraps `node` in an SVG group carrying a `<title>` when `tooltip` is non-empty.
pub(crate) fn with_title<N>(node: N, tooltip: &str) -> SvgNode
where
    N: svg::Node,
{
    if tooltip.is_empty() {
        return Box::new(node);
    }

    let mut title = svg::node::element::Element::new("title");
    title.append(svg::node::Text::new(tooltip));
    Box::new(svg::node::element::Group::new().add(title).add(node))
}
