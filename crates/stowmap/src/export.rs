//! Rendering surfaces.
//!
//! A [`RenderingSurface`] accepts drawables one at a time, in paint order, and
//! turns the accumulated sequence into output text. Two surfaces ship with
//! the crate:
//!
//! - [`svg::SvgStage`] - paints the drawables into an SVG document
//! - [`json::JsonStage`] - writes the drawable sequence as JSON for external painters

pub mod json;
pub mod svg;

use thiserror::Error;

use stowmap_core::draw::Drawable;

/// Errors raised while rendering accumulated drawables.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Render error: {0}")]
    Render(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A target that accumulates drawables and paints them.
pub trait RenderingSurface {
    /// Appends one drawable. Call order is paint order.
    fn add(&mut self, drawable: &Drawable);

    /// Produces output for everything added so far.
    ///
    /// Rendering does not consume the accumulated drawables; calling it again
    /// without adding anything yields the same output.
    fn render(&self) -> Result<String, ExportError>;
}
