use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::RenderTarget;
use crate::text::{Font, FontSystem};

/// Draws `text` with the top-left of its line box at `origin`.
///
/// `origin` is rounded to whole pixels; glyph placement is exactly what
/// [`FontSystem::measure_text`] reports, offset by that origin.
pub fn render_text(
    target: &mut dyn RenderTarget,
    fonts: &FontSystem,
    text: &str,
    origin: Vec2,
    font: Font,
    color: Color,
) {
    if color.a == 0 || !origin.is_finite() {
        return;
    }
    let ox = origin.x.round() as i32;
    let oy = origin.y.round() as i32;

    fonts
        .place(text, font)
        .for_each_pixel(|x, y, coverage| target.blend_pixel_i(ox + x, oy + y, color, coverage));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Layer;
    use crate::text::BoundingBox;

    fn ink_bounds(layer: &Layer) -> BoundingBox {
        let mut acc = BoundingBox::default();
        for y in 0..layer.height() {
            for x in 0..layer.width() {
                if layer.pixel(x, y).unwrap().a > 0 {
                    let (x, y) = (x as i32, y as i32);
                    acc = acc.union(BoundingBox::new(x, y, x + 1, y + 1));
                }
            }
        }
        acc
    }

    #[test]
    fn drawn_ink_matches_measurement() {
        let fonts = FontSystem::with_search_dirs(Vec::new());
        let font = Font::builtin(16.0);
        let mut layer = Layer::new(200, 40);

        render_text(&mut layer, &fonts, "SORA 2", Vec2::new(10.0, 5.0), font, Color::white());

        let m = fonts.measure_text("SORA 2", font);
        let expected = BoundingBox::new(m.x0 + 10, m.y0 + 5, m.x1 + 10, m.y1 + 5);
        assert_eq!(ink_bounds(&layer), expected);
    }

    #[test]
    fn origin_is_snapped() {
        let fonts = FontSystem::with_search_dirs(Vec::new());
        let font = Font::builtin(8.0);
        let mut a = Layer::new(40, 20);
        let mut b = Layer::new(40, 20);
        render_text(&mut a, &fonts, "S", Vec2::new(3.2, 4.4), font, Color::white());
        render_text(&mut b, &fonts, "S", Vec2::new(3.0, 4.0), font, Color::white());
        assert_eq!(a, b);
    }

    #[test]
    fn clipped_text_does_not_panic() {
        let fonts = FontSystem::with_search_dirs(Vec::new());
        let mut layer = Layer::new(10, 10);
        render_text(&mut layer, &fonts, "WIDE TEXT", Vec2::new(-20.0, -3.0), Font::builtin(16.0), Color::white());
        render_text(&mut layer, &fonts, "X", Vec2::new(8.0, 8.0), Font::builtin(16.0), Color::white());
        assert!(!layer.is_clear());
    }

    #[test]
    fn translucent_text_keeps_alpha() {
        let fonts = FontSystem::with_search_dirs(Vec::new());
        let mut layer = Layer::new(20, 20);
        render_text(&mut layer, &fonts, "|", Vec2::default(), Font::builtin(8.0), Color::white().with_alpha(180));
        assert_eq!(layer.pixel(2, 0).unwrap().a, 180);
    }
}
