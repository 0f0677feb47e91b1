//! Geometric primitives for diagram layout and positioning.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Stowmap uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Unlike shapes that are positioned by their center, every Stowmap drawable is
//! anchored at its top-left corner, which is what the flow layout advances.

use serde::Serialize;

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use stowmap_core::geometry::Point;
/// let origin = Point::new(100.0, 50.0);
/// let moved = origin.offset(25.0, 25.0);
/// assert_eq!(moved.x(), 125.0);
/// assert_eq!(moved.y(), 75.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Returns a new point moved by `dx` and `dy`
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Converts a top-left point and size into a bounds rectangle
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_top_left(self, size)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Creates the smallest bounds that contains every point.
    ///
    /// Returns `None` for an empty iterator.
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let seed = Self::new_from_top_left(first, Size::default());
        Some(points.fold(seed, |acc, point| {
            acc.merge(&Self::new_from_top_left(point, Size::default()))
        }))
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use stowmap_core::geometry::{Bounds, Point, Size};
    /// let block = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 30.0));
    /// let folder = Bounds::new_from_top_left(Point::new(10.0, 40.0), Size::new(120.0, 80.0));
    ///
    /// let combined = block.merge(&folder);
    /// assert_eq!(combined.width(), 130.0);
    /// assert_eq!(combined.height(), 120.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_point_offset_and_add() {
        let p = Point::new(100.0, 50.0);
        assert_eq!(p.offset(25.0, 25.0), Point::new(125.0, 75.0));
        assert_eq!(p.add_point(Point::new(-10.0, 5.0)), Point::new(90.0, 55.0));
    }

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Point::new(100.0, 50.0).to_bounds(Size::new(500.0, 190.0));
        assert_approx_eq!(f32, bounds.min_x(), 100.0);
        assert_approx_eq!(f32, bounds.min_y(), 50.0);
        assert_approx_eq!(f32, bounds.max_x(), 600.0);
        assert_approx_eq!(f32, bounds.max_y(), 240.0);
        assert_eq!(bounds.to_size(), Size::new(500.0, 190.0));
    }

    #[test]
    fn test_bounds_enclosing() {
        assert!(Bounds::enclosing(Vec::new()).is_none());

        let bounds = Bounds::enclosing([
            Point::new(100.0, 0.0),
            Point::new(150.0, 25.0),
            Point::new(100.0, 50.0),
        ])
        .expect("non-empty");
        assert_approx_eq!(f32, bounds.min_x(), 100.0);
        assert_approx_eq!(f32, bounds.min_y(), 0.0);
        assert_approx_eq!(f32, bounds.width(), 50.0);
        assert_approx_eq!(f32, bounds.height(), 50.0);
    }

    #[test]
    fn test_size_is_zero() {
        assert!(Size::default().is_zero());
        assert!(!Size::new(1.0, 0.0).is_zero());
    }

    proptest! {
        #[test]
        fn prop_merge_contains_both(
            ax in -1000i32..1000, ay in -1000i32..1000, aw in 0i32..500, ah in 0i32..500,
            bx in -1000i32..1000, by in -1000i32..1000, bw in 0i32..500, bh in 0i32..500,
        ) {
            let a = Point::new(ax as f32, ay as f32).to_bounds(Size::new(aw as f32, ah as f32));
            let b = Point::new(bx as f32, by as f32).to_bounds(Size::new(bw as f32, bh as f32));
            let merged = a.merge(&b);

            prop_assert!(merged.min_x() <= a.min_x() && merged.min_x() <= b.min_x());
            prop_assert!(merged.min_y() <= a.min_y() && merged.min_y() <= b.min_y());
            prop_assert!(merged.max_x() >= a.max_x() && merged.max_x() >= b.max_x());
            prop_assert!(merged.max_y() >= a.max_y() && merged.max_y() >= b.max_y());
        }
    }
}
