//! SVG rendering surface.

use log::debug;
use svg::{Document, node::element as svg_element};

use stowmap_core::{
    color::Color,
    draw::Drawable,
    geometry::{Bounds, Size},
};

use super::{ExportError, RenderingSurface};
use crate::config::{AppConfig, DEFAULT_MARGIN};

/// Paints drawables into an SVG document.
///
/// The canvas is sized from the content: the union of all drawable bounds
/// plus a margin on every side. Drawables keep their diagram coordinates; a
/// translated group moves them inside the margin.
#[derive(Debug, Clone)]
pub struct SvgStage {
    drawables: Vec<Drawable>,
    background: Option<Color>,
    margin: f32,
}

impl Default for SvgStage {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgStage {
    pub fn new() -> Self {
        Self {
            drawables: Vec::new(),
            background: None,
            margin: DEFAULT_MARGIN,
        }
    }

    /// Creates a stage styled by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Render`] if the configured background color is
    /// not a valid CSS color.
    pub fn from_config(config: &AppConfig) -> Result<Self, ExportError> {
        let background = config
            .style()
            .background_color()
            .map_err(ExportError::Render)?;

        Ok(Self::new()
            .with_background(background)
            .with_margin(config.export().margin()))
    }

    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Area covered by the added drawables
    fn content_bounds(&self) -> Bounds {
        self.drawables
            .iter()
            .map(Drawable::bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
            .unwrap_or_default()
    }

    /// Builds the SVG document for the drawables added so far.
    pub fn document(&self) -> Document {
        let content_bounds = self.content_bounds();
        let canvas = Size::new(
            content_bounds.width() + 2.0 * self.margin,
            content_bounds.height() + 2.0 * self.margin,
        );
        debug!(width = canvas.width(), height = canvas.height(); "SVG canvas size");

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", canvas.width(), canvas.height()),
            )
            .set("width", canvas.width())
            .set("height", canvas.height());

        if let Some(background) = &self.background {
            let bg = svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", canvas.width())
                .set("height", canvas.height())
                .set("fill", background);
            doc = doc.add(bg);
        }

        let mut content = svg_element::Group::new().set(
            "transform",
            format!(
                "translate({}, {})",
                self.margin - content_bounds.min_x(),
                self.margin - content_bounds.min_y()
            ),
        );
        for drawable in &self.drawables {
            content = content.add(drawable.to_svg());
        }

        doc.add(content)
    }
}

impl RenderingSurface for SvgStage {
    fn add(&mut self, drawable: &Drawable) {
        self.drawables.push(drawable.clone());
    }

    fn render(&self) -> Result<String, ExportError> {
        Ok(self.document().to_string())
    }
}
