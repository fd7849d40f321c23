use image::{Rgba, RgbaImage};

use crate::paint::Color;
use crate::render::RenderTarget;

use super::blend::{effective_alpha, source_over};

/// Transparent RGBA drawing surface.
///
/// Overlays are rasterized here first and then composited onto a [`Canvas`]
/// in one pass. Shapes drawn into the same layer combine with source-over,
/// so overlapping translucent strokes accumulate instead of overwriting.
///
/// [`Canvas`]: super::Canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pixels: RgbaImage,
}

impl Layer {
    /// Fully transparent layer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0])),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixels.get_pixel_checked(x, y).map(|p| {
            let [r, g, b, a] = p.0;
            Color::rgba(r, g, b, a)
        })
    }

    #[inline]
    pub fn as_image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// True when no pixel has been touched.
    pub fn is_clear(&self) -> bool {
        self.pixels.pixels().all(|p| p.0[3] == 0)
    }
}

impl RenderTarget for Layer {
    fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    fn blend_pixel(&mut self, x: u32, y: u32, color: Color, coverage: f32) {
        let a = effective_alpha(color.a, coverage);
        if a == 0 {
            return;
        }
        if let Some(p) = self.pixels.get_pixel_mut_checked(x, y) {
            p.0 = source_over(p.0, [color.r, color.g, color.b, a]);
        }
    }
}
