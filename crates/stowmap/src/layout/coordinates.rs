//! Fixed vertical bands for locations.
//!
//! Every location gets the same band height whatever its content; bands do
//! not grow with the number of folders or files.

use stowmap_core::geometry::Point;

/// Left edge shared by every location block.
pub const LOCATION_X: f32 = 100.0;

/// Top edge of the band for location 0.
pub const FIRST_BAND_Y: f32 = 50.0;

/// Vertical distance between the top edges of consecutive bands.
pub const BAND_PITCH: f32 = 220.0;

/// Largest location id whose band origin is exactly representable.
///
/// Band origins are `f32`; past `2^24` consecutive bands would no longer land
/// on their exact `50 + 220 id` edge.
pub const MAX_LOCATION_ID: u32 = ((1 << f32::MANTISSA_DIGITS) - FIRST_BAND_Y as u32) / BAND_PITCH as u32;

/// Returns the top-left corner of the block for location `id`.
///
/// The origin is exact for every id up to [`MAX_LOCATION_ID`]; larger ids get
/// the nearest representable band.
///
/// # Examples
///
/// ```
/// use stowmap::layout::coordinates::location_origin;
///
/// let origin = location_origin(2);
/// assert_eq!(origin.x(), 100.0);
/// assert_eq!(origin.y(), 490.0);
/// ```
pub fn location_origin(id: u32) -> Point {
    let y = f64::from(FIRST_BAND_Y) + f64::from(id) * f64::from(BAND_PITCH);
    Point::new(LOCATION_X, y as f32)
}
