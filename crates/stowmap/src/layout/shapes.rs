//! Shape factories, one per visual element kind.
//!
//! Each factory is a pure function of its anchor point and sizing inputs.
//! Sizes and colors are fixed design parameters of the diagram.

use stowmap_core::{
    color::Color,
    draw::{Polygon, Rectangle, StrokeDefinition, TextAnchor, TextLabel},
    geometry::{Point, Size},
};

use crate::{
    labels::{EditorSlot, PLACEHOLDER_LABEL},
    model::LocationKind,
};

pub const LOCATION_SIZE: Size = Size::new(500.0, 190.0);
pub const LOCATION_COLOR: &str = "lightgray";

/// Offset of the location name from the block's top-left corner.
pub const LABEL_OFFSET: Point = Point::new(250.0, 175.0);
pub const LABEL_FONT_SIZE: u16 = 20;

pub const FOLDER_HEIGHT: f32 = 115.0;
pub const EMPTY_FOLDER_WIDTH: f32 = 145.0;
pub const FOLDER_TAB_SIZE: Size = Size::new(40.0, 20.0);
pub const FOLDER_COLOR: &str = "peachpuff";

pub const FILE_SIZE: Size = Size::new(100.0, 80.0);
pub const COMPUTER_FILE_COLOR: &str = "lightblue";
pub const SERVER_FILE_COLOR: &str = "salmon";
pub const DEFAULT_FILE_COLOR: &str = "lightgreen";

pub const ARROW_SHAFT_SIZE: Size = Size::new(100.0, 50.0);
pub const ARROW_HEAD_LENGTH: f32 = 50.0;
pub const ARROW_COLOR: &str = "orange";
pub const ARROW_HEAD_STROKE_WIDTH: f32 = 2.0;

/// Editor offset inside a file block.
const FILE_EDITOR_OFFSET: Point = Point::new(10.0, 30.0);
/// Editor offset inside an arrow shaft.
const ARROW_EDITOR_OFFSET: Point = Point::new(10.0, 15.0);

/// Every fill and border color the factories use.
const PALETTE: [&str; 6] = [
    LOCATION_COLOR,
    FOLDER_COLOR,
    COMPUTER_FILE_COLOR,
    SERVER_FILE_COLOR,
    DEFAULT_FILE_COLOR,
    ARROW_COLOR,
];

/// Resolves a palette entry. Entries are checked in tests, so the fallback
/// to the default color is never taken.
fn palette(name: &'static str) -> Color {
    Color::new(name).unwrap_or_default()
}

/// A file rectangle and the editing slot laid over it.
#[derive(Debug, Clone)]
pub struct FileBlock {
    rect: Rectangle,
    editor: EditorSlot,
}

impl FileBlock {
    pub fn rect(&self) -> &Rectangle {
        &self.rect
    }

    pub fn editor(&self) -> EditorSlot {
        self.editor
    }

    pub fn into_parts(self) -> (Rectangle, EditorSlot) {
        (self.rect, self.editor)
    }
}

/// A shared-file arrow: a rectangular shaft followed by a triangular head.
#[derive(Debug, Clone)]
pub struct SharedFileArrow {
    shaft: Rectangle,
    head: Polygon,
    editor: EditorSlot,
}

impl SharedFileArrow {
    pub fn shaft(&self) -> &Rectangle {
        &self.shaft
    }

    pub fn head(&self) -> &Polygon {
        &self.head
    }

    /// Editing slot; it edits the shaft's tooltip
    pub fn editor(&self) -> EditorSlot {
        self.editor
    }

    pub fn into_parts(self) -> (Rectangle, Polygon, EditorSlot) {
        (self.shaft, self.head, self.editor)
    }
}

pub fn location_block(origin: Point) -> Rectangle {
    Rectangle::new(origin, LOCATION_SIZE, palette(LOCATION_COLOR))
}

/// The location name, centered under the folder row.
pub fn location_label(origin: Point, name: &str) -> TextLabel {
    TextLabel::new(origin.add_point(LABEL_OFFSET), name)
        .with_color(Color::default())
        .with_font_size(LABEL_FONT_SIZE)
        .with_anchor(TextAnchor::Middle)
}

/// Width of a folder holding `file_count` files.
pub fn folder_width(file_count: usize) -> f32 {
    if file_count == 0 {
        EMPTY_FOLDER_WIDTH
    } else {
        80.0 + 115.0 * file_count as f32
    }
}

pub fn folder_base(origin: Point, file_count: usize) -> Rectangle {
    Rectangle::new(
        origin,
        Size::new(folder_width(file_count), FOLDER_HEIGHT),
        palette(FOLDER_COLOR),
    )
}

/// The folder tab shares the base's top-left corner.
pub fn folder_tab(origin: Point) -> Rectangle {
    Rectangle::new(origin, FOLDER_TAB_SIZE, palette(FOLDER_COLOR))
}

/// Fill color of file blocks for a location kind.
///
/// Kinds other than computers and servers use the default color.
pub fn file_color(kind: &LocationKind) -> Color {
    match kind {
        LocationKind::Computer => palette(COMPUTER_FILE_COLOR),
        LocationKind::Server => palette(SERVER_FILE_COLOR),
        // Drives and unrecognised types fall through to the default.
        _ => palette(DEFAULT_FILE_COLOR),
    }
}

pub fn file_block(origin: Point, kind: &LocationKind) -> FileBlock {
    FileBlock {
        rect: Rectangle::new(origin, FILE_SIZE, file_color(kind)).with_tooltip(PLACEHOLDER_LABEL),
        editor: EditorSlot::new(origin.add_point(FILE_EDITOR_OFFSET)),
    }
}

pub fn shared_file_arrow(origin: Point) -> SharedFileArrow {
    let color = palette(ARROW_COLOR);
    let shaft_right = origin.x() + ARROW_SHAFT_SIZE.width();
    let shaft_height = ARROW_SHAFT_SIZE.height();

    let head = Polygon::new(
        vec![
            Point::new(shaft_right, origin.y()),
            Point::new(
                shaft_right + ARROW_HEAD_LENGTH,
                origin.y() + shaft_height / 2.0,
            ),
            Point::new(shaft_right, origin.y() + shaft_height),
        ],
        color,
    )
    .with_stroke(StrokeDefinition::solid(
        Color::default(),
        ARROW_HEAD_STROKE_WIDTH,
    ));

    SharedFileArrow {
        shaft: Rectangle::new(origin, ARROW_SHAFT_SIZE, color).with_tooltip(PLACEHOLDER_LABEL),
        head,
        editor: EditorSlot::new(origin.add_point(ARROW_EDITOR_OFFSET)),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn color(name: &str) -> Color {
        Color::new(name).unwrap()
    }

    #[test]
    fn test_palette_entries_parse() {
        for name in PALETTE {
            assert!(Color::new(name).is_ok(), "palette entry `{name}` must parse");
        }
    }

    #[test]
    fn test_location_block_with_markup_name() {
        let origin = Point::new(100.0, 50.0);
        let block = location_block(origin);
        let label = location_label(origin, "<b>&x</b>");

        assert_eq!(block.fill(), color("lightgray"));
        assert_eq!(label.text(), "<b>&x</b>");
    }

    #[test]
    fn test_location_block() {
        let block = location_block(Point::new(100.0, 270.0));
        assert_eq!(block.position(), Point::new(100.0, 270.0));
        assert_eq!(block.size(), Size::new(500.0, 190.0));
        assert_eq!(block.fill(), color("lightgray"));
        assert!(block.tooltip().is_empty());
    }

    #[test]
    fn test_location_label() {
        let label = location_label(Point::new(100.0, 50.0), "JoeDrive0");
        assert_eq!(label.position(), Point::new(350.0, 225.0));
        assert_eq!(label.text(), "JoeDrive0");
        assert_eq!(label.font_size(), 20);
        assert_eq!(label.anchor(), TextAnchor::Middle);
    }

    #[test]
    fn test_folder_base_and_tab() {
        let origin = Point::new(545.0, 65.0);

        let empty = folder_base(origin, 0);
        assert_eq!(empty.size(), Size::new(145.0, 115.0));

        let three = folder_base(origin, 3);
        assert_eq!(three.size(), Size::new(425.0, 115.0));
        assert_eq!(three.fill(), color("peachpuff"));

        let tab = folder_tab(origin);
        assert_eq!(tab.position(), origin);
        assert_eq!(tab.size(), Size::new(40.0, 20.0));
        assert_eq!(tab.fill(), color("peachpuff"));
    }

    #[test]
    fn test_file_colors_by_kind() {
        let origin = Point::new(0.0, 0.0);
        let cases = [
            (LocationKind::Computer, "lightblue"),
            (LocationKind::Server, "salmon"),
            (LocationKind::Drive, "lightgreen"),
            (LocationKind::Other("Tape".to_string()), "lightgreen"),
        ];

        for (kind, expected) in cases {
            let block = file_block(origin, &kind);
            assert_eq!(block.rect().fill(), color(expected), "kind {kind}");
            assert_eq!(block.rect().size(), Size::new(100.0, 80.0));
        }
    }

    #[test]
    fn test_file_block_editor_and_placeholder() {
        let block = file_block(Point::new(425.0, 75.0), &LocationKind::Drive);
        assert_eq!(block.rect().tooltip(), PLACEHOLDER_LABEL);
        assert_eq!(block.editor().anchor(), Point::new(435.0, 105.0));
        assert_eq!(block.editor().size(), Size::new(80.0, 20.0));
    }

    #[test]
    fn test_shared_file_arrow_geometry() {
        let arrow = shared_file_arrow(Point::new(125.0, 90.0));

        assert_eq!(arrow.shaft().position(), Point::new(125.0, 90.0));
        assert_eq!(arrow.shaft().size(), Size::new(100.0, 50.0));
        assert_eq!(arrow.shaft().fill(), color("orange"));
        assert_eq!(arrow.shaft().tooltip(), PLACEHOLDER_LABEL);

        assert_eq!(
            arrow.head().points(),
            [
                Point::new(225.0, 90.0),
                Point::new(275.0, 115.0),
                Point::new(225.0, 140.0),
            ]
        );
        assert_eq!(arrow.head().fill(), color("orange"));
        let stroke = arrow.head().stroke().expect("arrow head is bordered");
        assert_eq!(stroke.width(), 2.0);
        assert_eq!(stroke.color(), Color::default());

        assert_eq!(arrow.editor().anchor(), Point::new(135.0, 105.0));
    }

    proptest! {
        #[test]
        fn prop_folder_width(n in 0usize..500) {
            let base = folder_base(Point::default(), n);
            let expected = if n == 0 { 145.0 } else { 80.0 + 115.0 * n as f32 };
            prop_assert_eq!(base.width(), expected);
            prop_assert_eq!(base.height(), 115.0);
        }
    }
}
