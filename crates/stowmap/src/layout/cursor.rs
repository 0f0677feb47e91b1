//! Flow cursor: the running position of left-to-right placement.
//!
//! A cursor only ever moves right, by a fixed step after each placement.
//! There is no wrapping and no bound on the total width.

use stowmap_core::geometry::Point;

/// Step after a shared-file arrow.
pub const ARROW_STEP: f32 = 180.0;

/// Step after a file block, whatever the location kind.
pub const FILE_STEP: f32 = 120.0;

/// Step after a folder without files.
pub const EMPTY_FOLDER_STEP: f32 = 160.0;

/// Returns the step after a folder holding `file_count` files.
pub fn folder_step(file_count: usize) -> f32 {
    if file_count == 0 {
        EMPTY_FOLDER_STEP
    } else {
        90.0 + FILE_STEP * file_count as f32
    }
}

/// A mutable placement position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowCursor {
    position: Point,
}

impl FlowCursor {
    pub fn new(start: Point) -> Self {
        Self { position: start }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn x(&self) -> f32 {
        self.position.x()
    }

    pub fn y(&self) -> f32 {
        self.position.y()
    }

    /// Moves the cursor right by `dx`
    pub fn advance(&mut self, dx: f32) {
        self.position = self.position.offset(dx, 0.0);
    }

    pub fn advance_past_arrow(&mut self) {
        self.advance(ARROW_STEP);
    }

    pub fn advance_past_file(&mut self) {
        self.advance(FILE_STEP);
    }

    pub fn advance_past_folder(&mut self, file_count: usize) {
        self.advance(folder_step(file_count));
    }
}
