//! Label-editing bindings.
//!
//! File blocks and shared-file arrows carry an editable tooltip. The layout
//! does not create any editing widget; it records a [`LabelBinding`] for each
//! editable shape instead. An editor (a text field in a UI, a batch relabeler,
//! the CLI's `--name-labels` flag) reads the bindings after assembly and
//! writes back through [`Diagram::set_tooltip`](crate::Diagram::set_tooltip),
//! addressing the shape by its [`DrawableId`].

use stowmap_core::{
    draw::DrawableId,
    geometry::{Bounds, Point, Size},
};

/// Placeholder tooltip given to every editable shape at creation.
pub const PLACEHOLDER_LABEL: &str = "filler";

/// Size of the editing field laid over an editable shape.
pub const EDITOR_SIZE: Size = Size::new(80.0, 20.0);

/// Where an editing field sits relative to the diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorSlot {
    anchor: Point,
    size: Size,
}

impl EditorSlot {
    pub fn new(anchor: Point) -> Self {
        Self {
            anchor,
            size: EDITOR_SIZE,
        }
    }

    /// Top-left corner of the editing field
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn bounds(&self) -> Bounds {
        self.anchor.to_bounds(self.size)
    }
}

/// Ties an editable drawable to the file it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelBinding {
    target: DrawableId,
    slot: EditorSlot,
    source: String,
}

impl LabelBinding {
    pub fn new(target: DrawableId, slot: EditorSlot, source: impl Into<String>) -> Self {
        Self {
            target,
            slot,
            source: source.into(),
        }
    }

    /// The drawable whose tooltip this binding edits
    pub fn target(&self) -> DrawableId {
        self.target
    }

    pub fn slot(&self) -> EditorSlot {
        self.slot
    }

    /// Name of the file the bound shape represents
    pub fn source(&self) -> &str {
        &self.source
    }
}
