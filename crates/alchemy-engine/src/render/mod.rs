//! CPU rasterization.
//!
//! Rasterizers consume `scene` draw commands and blend coverage into any
//! [`RenderTarget`]. Coverage is analytic (no supersampling): each rasterizer
//! computes, per pixel center, how much of the pixel the shape covers.
//!
//! Convention:
//! - geometry is in pixels (top-left origin, +Y down)
//! - pixel `(x, y)` is sampled at its center `(x + 0.5, y + 0.5)`

pub mod shapes;

use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};
use crate::text::FontSystem;

/// Surface rasterizers draw into.
pub trait RenderTarget {
    fn dimensions(&self) -> (u32, u32);

    /// Blends `color` into pixel `(x, y)` with `coverage` in `[0, 1]`.
    ///
    /// The effective source alpha is `color.a * coverage`. Out-of-bounds
    /// pixels are ignored.
    fn blend_pixel(&mut self, x: u32, y: u32, color: Color, coverage: f32);

    /// Signed-coordinate variant of [`blend_pixel`](Self::blend_pixel).
    #[inline]
    fn blend_pixel_i(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if x >= 0 && y >= 0 {
            self.blend_pixel(x as u32, y as u32, color, coverage);
        }
    }
}

/// Rasterizes every command of `list` into `target`, back-to-front.
pub fn render_list(target: &mut dyn RenderTarget, list: &mut DrawList, fonts: &FontSystem) {
    for item in list.iter_in_paint_order() {
        match &item.cmd {
            DrawCmd::Rect(cmd) => shapes::rect::render_rect(target, cmd),
            DrawCmd::Circle(cmd) => shapes::circle::render_circle(target, cmd),
            DrawCmd::Line(cmd) => shapes::line::render_line(target, cmd),
            DrawCmd::Text(cmd) => {
                shapes::text::render_text(target, fonts, &cmd.text, cmd.origin, cmd.font, cmd.color)
            }
        }
    }
}
