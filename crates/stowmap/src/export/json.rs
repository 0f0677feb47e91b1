//! JSON rendering surface.
//!
//! Writes the drawable sequence as a JSON array, in paint order, so a painter
//! outside this crate can draw it. Each entry is tagged with its `kind`.

use stowmap_core::draw::Drawable;

use super::{ExportError, RenderingSurface};

#[derive(Debug, Clone, Default)]
pub struct JsonStage {
    drawables: Vec<Drawable>,
}

impl JsonStage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderingSurface for JsonStage {
    fn add(&mut self, drawable: &Drawable) {
        self.drawables.push(drawable.clone());
    }

    fn render(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(&self.drawables)?)
    }
}
