//! Single-pass assembly of a [`Diagram`] from the input model.
//!
//! For every location, in ascending id order:
//!
//! ```text
//! ┌ location block ────────────────────────────────────────────────┐
//! │ [shared ▶] [shared ▶] [file] [file] ┌folder───────────┐ ┌folder┐ │
//! │                                     │ [file] [file]   │ │      │ │
//! │                                     └─────────────────┘ └──────┘ │
//! │                         name                                     │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Shared-file arrows come first, then loose files, then folders, each placed
//! at a flow cursor that only moves right. Nothing is placed relative to an
//! entity processed later, and nothing wraps.

use log::{debug, info, trace};

use stowmap_core::geometry::Point;

use super::{
    Diagram,
    coordinates::location_origin,
    cursor::FlowCursor,
    shapes,
};
use crate::{
    labels::LabelBinding,
    model::{FolderModel, LocationKind, LocationModel, Locations},
};

/// Offset of the top cursor from the location origin.
const CONTENT_INSET: Point = Point::new(25.0, 25.0);

/// Vertical drop of shared-file arrows below the top cursor.
const ARROW_DROP: f32 = 15.0;

/// Vertical offset of the folder row from the location origin.
const FOLDER_ROW_OFFSET: f32 = 15.0;

/// Offset of a folder's first file from the folder's corner.
const FOLDER_CONTENT_INSET: Point = Point::new(50.0, 10.0);

/// Lays out every location and returns the drawables in emission order.
///
/// The same model always yields the same diagram.
pub fn assemble(locations: &Locations) -> Diagram {
    info!(locations_count = locations.len(); "Assembling diagram");

    let mut diagram = Diagram::new();
    for location in locations.iter() {
        assemble_location(&mut diagram, location);
    }

    info!(drawables_count = diagram.len(), bindings_count = diagram.bindings().len(); "Diagram assembled");
    diagram
}

fn assemble_location(diagram: &mut Diagram, location: &LocationModel) {
    let origin = location_origin(location.id());
    debug!(
        id = location.id(),
        name = location.name(),
        kind = location.kind().as_str(),
        x = origin.x(),
        y = origin.y();
        "Placing location"
    );

    diagram.push(shapes::location_block(origin));
    diagram.push(shapes::location_label(origin, location.name()));

    let mut cursor = FlowCursor::new(origin.add_point(CONTENT_INSET));

    for file in location.shared_files() {
        let arrow_origin = cursor.position().offset(0.0, ARROW_DROP);
        let (shaft, head, editor) = shapes::shared_file_arrow(arrow_origin).into_parts();

        let shaft_id = diagram.push(shaft);
        diagram.push(head);
        diagram.bind(LabelBinding::new(shaft_id, editor, file.as_str()));
        trace!(file = file.as_str(), x = arrow_origin.x(); "Shared file placed");

        cursor.advance_past_arrow();
    }

    for file in location.loose_files() {
        place_file(diagram, &mut cursor, location.kind(), file);
    }

    let mut folder_cursor = FlowCursor::new(Point::new(
        cursor.x(),
        origin.y() + FOLDER_ROW_OFFSET,
    ));

    for (key, folder) in location.folders() {
        trace!(key, name = folder.name(), x = folder_cursor.x(); "Placing folder");
        assemble_folder(diagram, folder_cursor.position(), location.kind(), folder);
        folder_cursor.advance_past_folder(folder.files().len());
    }
}

fn assemble_folder(diagram: &mut Diagram, corner: Point, kind: &LocationKind, folder: &FolderModel) {
    let file_count = folder.files().len();
    diagram.push(shapes::folder_base(corner, file_count));
    diagram.push(shapes::folder_tab(corner));

    let mut cursor = FlowCursor::new(corner.add_point(FOLDER_CONTENT_INSET));
    for file in folder.files() {
        place_file(diagram, &mut cursor, kind, file);
    }
}

fn place_file(diagram: &mut Diagram, cursor: &mut FlowCursor, kind: &LocationKind, file: &str) {
    let (rect, editor) = shapes::file_block(cursor.position(), kind).into_parts();
    let id = diagram.push(rect);
    diagram.bind(LabelBinding::new(id, editor, file));
    cursor.advance_past_file();
}
