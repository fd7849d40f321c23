//! Coordinate and geometry types shared by the compositor and rasterizers.
//!
//! Canonical CPU space:
//! - pixels, origin top-left
//! - +X right, +Y down
//! - pixel `(x, y)` covers `[x, x + 1) × [y, y + 1)`; its center is `(x + 0.5, y + 0.5)`

mod rect;
mod vec2;

pub use rect::{PixelSpan, Rect};
pub use vec2::Vec2;

/// Center of pixel `(x, y)`.
///
/// Use this to place hairlines so they light a single row/column.
#[inline]
pub fn pixel_center(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32 + 0.5, y as f32 + 0.5)
}
