use log::debug;

use stowmap_core::{
    draw::{Drawable, DrawableId},
    geometry::Bounds,
};

use super::LayoutError;
use crate::{export::RenderingSurface, labels::LabelBinding};

/// The assembled diagram: drawables in paint order plus their label bindings.
///
/// Drawables are append-only. Their geometry and style are read-only from
/// outside the layout; the tooltip is the only field that may still change,
/// through [`Diagram::set_tooltip`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagram {
    drawables: Vec<Drawable>,
    bindings: Vec<LabelBinding>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a drawable and returns its identity.
    pub(crate) fn push(&mut self, drawable: impl Into<Drawable>) -> DrawableId {
        let id = DrawableId::new(self.drawables.len());
        self.drawables.push(drawable.into());
        id
    }

    pub(crate) fn bind(&mut self, binding: LabelBinding) {
        self.bindings.push(binding);
    }

    /// Drawables in paint order; later entries draw over earlier ones.
    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    pub fn get(&self, id: DrawableId) -> Option<&Drawable> {
        self.drawables.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    /// Editable shapes in emission order
    pub fn bindings(&self) -> &[LabelBinding] {
        &self.bindings
    }

    /// Replaces the tooltip of the drawable `id`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownDrawable`] if `id` does not belong to
    /// this diagram.
    pub fn set_tooltip(&mut self, id: DrawableId, tooltip: impl Into<String>) -> Result<(), LayoutError> {
        let drawable = self
            .drawables
            .get_mut(id.index())
            .ok_or(LayoutError::UnknownDrawable(id))?;
        drawable.set_tooltip(tooltip);
        Ok(())
    }

    /// Sets every bound tooltip to the name of the file its shape stands for.
    pub fn label_with_file_names(&mut self) {
        for binding in &self.bindings {
            if let Some(drawable) = self.drawables.get_mut(binding.target().index()) {
                drawable.set_tooltip(binding.source());
            }
        }
        debug!(labels_count = self.bindings.len(); "Tooltips set to file names");
    }

    /// Area covered by all drawables, or `None` for an empty diagram.
    pub fn bounds(&self) -> Option<Bounds> {
        self.drawables
            .iter()
            .map(Drawable::bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
    }

    /// Feeds every drawable to `surface` in paint order.
    pub fn render_to<S: RenderingSurface + ?Sized>(&self, surface: &mut S) {
        for drawable in &self.drawables {
            surface.add(drawable);
        }
    }
}
