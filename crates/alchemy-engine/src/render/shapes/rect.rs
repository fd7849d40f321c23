use crate::render::RenderTarget;
use crate::scene::shapes::RectCmd;

/// Fills a rectangle with exact fractional coverage on partial edge pixels.
pub fn render_rect(target: &mut dyn RenderTarget, cmd: &RectCmd) {
    if cmd.color.a == 0 {
        return;
    }
    let (w, h) = target.dimensions();
    let Some(span) = cmd.rect.pixel_span(w, h) else { return };

    for y in span.y0..span.y1 {
        for x in span.x0..span.x1 {
            let coverage = cmd.rect.pixel_coverage(x, y);
            if coverage > 0.0 {
                target.blend_pixel(x, y, cmd.color, coverage);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::coords::Rect;
    use crate::paint::Color;

    #[test]
    fn accent_bar_fills_exact_pixels() {
        let mut canvas = Canvas::new(20, 30, Color::black());
        render_rect(&mut canvas, &RectCmd::new(Rect::new(4.0, 2.0, 7.0, 21.0), Color::white()));

        let mut count = 0;
        for (x, y, p) in canvas.as_image().enumerate_pixels() {
            let inside = (4..11).contains(&x) && (2..23).contains(&y);
            assert_eq!(p.0 == [255, 255, 255], inside, "pixel ({x}, {y})");
            count += inside as u32;
        }
        assert_eq!(count, 7 * 21);
    }

    #[test]
    fn half_pixel_edge_blends() {
        let mut canvas = Canvas::new(4, 1, Color::black());
        render_rect(&mut canvas, &RectCmd::new(Rect::new(0.5, 0.0, 1.0, 1.0), Color::white()));
        assert_eq!(canvas.pixel(0, 0), Some(Color::rgb(128, 128, 128)));
        assert_eq!(canvas.pixel(1, 0), Some(Color::rgb(128, 128, 128)));
        assert_eq!(canvas.pixel(2, 0), Some(Color::black()));
    }
}
