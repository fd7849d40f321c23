use std::path::Path;

use image::{Rgb, RgbImage};

use crate::coords::Vec2;
use crate::paint::{Color, GradientSegment, VerticalGradient};
use crate::render::{self, RenderTarget};
use crate::scene::DrawList;
use crate::text::{Font, FontSystem};

use super::blend::{blend_over_opaque, effective_alpha};
use super::export::{write_image, ExportError, ExportOptions};
use super::{CompositeError, Layer};

/// Opaque RGB8 pixel grid every compositing step mutates in place.
///
/// The backing buffer has no alpha channel, so the canvas is flattened by
/// construction: translucent draws blend into the existing pixels and the
/// result is always fully opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pixels: RgbImage,
}

impl Canvas {
    /// Allocates a `width × height` canvas filled with `background`.
    ///
    /// The alpha of `background` is ignored.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        log::debug!("canvas {width}x{height} background {background:?}");
        Self {
            pixels: RgbImage::from_pixel(width, height, Rgb(background.to_rgb_array())),
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

    /// Pixel at `(x, y)`, or `None` when out of bounds. Always opaque.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixels.get_pixel_checked(x, y).map(|p| Color::from(*p))
    }

    #[inline]
    pub fn as_image(&self) -> &RgbImage {
        &self.pixels
    }

    /// Overwrites scanline `y` with `color`. Out-of-range rows are ignored.
    pub fn fill_row(&mut self, y: u32, color: Color) {
        if y >= self.height() {
            return;
        }
        let px = Rgb(color.to_rgb_array());
        for x in 0..self.width() {
            self.pixels.put_pixel(x, y, px);
        }
    }

    /// Paints one gradient band, overwriting whatever the rows held before.
    ///
    /// Requires `y_start < y_end <= height`; otherwise the canvas is left
    /// untouched and [`CompositeError::BandOutOfRange`] is returned.
    pub fn paint_vertical_gradient(&mut self, segment: &GradientSegment) -> Result<(), CompositeError> {
        if segment.y_start >= segment.y_end || segment.y_end > self.height() {
            return Err(CompositeError::BandOutOfRange {
                y_start: segment.y_start,
                y_end: segment.y_end,
                height: self.height(),
            });
        }

        for y in segment.y_start..segment.y_end {
            self.fill_row(y, segment.color_at(y));
        }
        Ok(())
    }

    /// Paints every segment of `gradient` in order.
    ///
    /// All bands are validated before any row is written.
    pub fn paint_gradient(&mut self, gradient: &VerticalGradient) -> Result<(), CompositeError> {
        let height = self.height();
        if let Some(bad) = gradient
            .segments
            .iter()
            .find(|s| s.y_start >= s.y_end || s.y_end > height)
        {
            return Err(CompositeError::BandOutOfRange {
                y_start: bad.y_start,
                y_end: bad.y_end,
                height,
            });
        }

        for segment in &gradient.segments {
            self.paint_vertical_gradient(segment)?;
        }
        log::debug!("painted gradient with {} segment(s)", gradient.segments.len());
        Ok(())
    }

    /// Blends `layer` onto the canvas and flattens the result.
    ///
    /// Layers of a different size are composited over their overlapping area.
    pub fn composite(&mut self, layer: &Layer) {
        let w = self.width().min(layer.width());
        let h = self.height().min(layer.height());
        let src = layer.as_image();

        for y in 0..h {
            for x in 0..w {
                let [r, g, b, a] = src.get_pixel(x, y).0;
                if a == 0 {
                    continue;
                }
                let dst = self.pixels.get_pixel_mut(x, y);
                dst.0 = blend_over_opaque(dst.0, [r, g, b], a);
            }
        }
    }

    /// Rasterizes `shapes` into a fresh transparent layer, then composites it.
    ///
    /// Each shape's opacity is the alpha of its color. Inside the layer shapes
    /// combine with source-over in paint order.
    pub fn draw_alpha_overlay(&mut self, shapes: &mut DrawList, fonts: &FontSystem) {
        let mut layer = Layer::new(self.width(), self.height());
        render::render_list(&mut layer, shapes, fonts);
        self.composite(&layer);
        log::debug!("composited overlay of {} shape(s)", shapes.items().len());
    }

    /// Rasterizes `shapes` straight onto the canvas in paint order.
    pub fn draw(&mut self, shapes: &mut DrawList, fonts: &FontSystem) {
        render::render_list(self, shapes, fonts);
    }

    /// Renders `text` with its line box's top-left at `position`.
    ///
    /// `position` is snapped to whole pixels, matching [`FontSystem::measure_text`].
    pub fn draw_text(
        &mut self,
        fonts: &FontSystem,
        text: &str,
        position: Vec2,
        font: Font,
        color: Color,
    ) {
        render::shapes::text::render_text(self, fonts, text, position, font, color);
    }

    /// Serializes the canvas to `path`.
    ///
    /// The file is written next to `path` under a temporary name and renamed
    /// into place on success; on failure the temporary file is removed, so an
    /// existing file at `path` is never replaced by a partial one.
    pub fn export(&self, path: impl AsRef<Path>, options: &ExportOptions) -> Result<(), ExportError> {
        let path = path.as_ref();
        write_image(self.as_image(), path, options)?;
        log::info!(
            "exported {}x{} {:?} to {}",
            self.width(),
            self.height(),
            options.format,
            path.display()
        );
        Ok(())
    }
}

impl RenderTarget for Canvas {
    fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    fn blend_pixel(&mut self, x: u32, y: u32, color: Color, coverage: f32) {
        let a = effective_alpha(color.a, coverage);
        if a == 0 {
            return;
        }
        if let Some(p) = self.pixels.get_pixel_mut_checked(x, y) {
            p.0 = blend_over_opaque(p.0, color.to_rgb_array(), a);
        }
    }
}
