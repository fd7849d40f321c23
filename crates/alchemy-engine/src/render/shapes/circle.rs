use crate::coords::{pixel_center, Rect};
use crate::render::RenderTarget;
use crate::scene::shapes::CircleCmd;

use super::edge_coverage;

/// Rasterizes a circle outline.
///
/// The stroke is the annulus between `radius - border.width` and `radius`,
/// with a one-pixel anti-aliasing ramp on both edges.
pub fn render_circle(target: &mut dyn RenderTarget, cmd: &CircleCmd) {
    let border = cmd.border;
    if !(cmd.radius > 0.0) || !(border.width > 0.0) || border.color.a == 0 || !cmd.center.is_finite() {
        return;
    }

    let (w, h) = target.dimensions();
    let Some(span) = Rect::around(cmd.center, cmd.radius + 1.0).pixel_span(w, h) else {
        return;
    };

    let inner_radius = cmd.radius - border.width;

    for y in span.y0..span.y1 {
        for x in span.x0..span.x1 {
            let d = pixel_center(x as i32, y as i32).distance(cmd.center);
            let coverage = edge_coverage(cmd.radius - d) * edge_coverage(d - inner_radius);
            if coverage > 0.0 {
                target.blend_pixel(x, y, border.color, coverage);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Layer;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::Border;

    fn outline(center: Vec2, radius: f32, width: f32) -> CircleCmd {
        CircleCmd::new(center, radius, Border::new(width, Color::white()))
    }

    #[test]
    fn outline_hits_ring_and_skips_center() {
        let mut layer = Layer::new(64, 64);
        render_circle(&mut layer, &outline(Vec2::new(32.0, 32.0), 20.0, 2.0));

        // Pixel center (32.5, 13.5) sits 18.5 from the center: mid-stroke.
        assert_eq!(layer.pixel(32, 13).unwrap().a, 255);
        assert_eq!(layer.pixel(32, 32).unwrap().a, 0);
        assert_eq!(layer.pixel(0, 0).unwrap().a, 0);
    }

    #[test]
    fn outline_is_symmetric() {
        let mut layer = Layer::new(64, 64);
        render_circle(&mut layer, &outline(Vec2::new(32.0, 32.0), 20.0, 2.0));
        for y in 0..64 {
            for x in 0..64 {
                assert_eq!(layer.pixel(x, y), layer.pixel(63 - x, y), "mirror at ({x}, {y})");
            }
        }
    }

    #[test]
    fn wide_stroke_leaves_hole() {
        let mut layer = Layer::new(32, 32);
        render_circle(&mut layer, &outline(Vec2::new(16.0, 16.0), 8.0, 4.0));
        // 5.5 from the center: between the inner (4) and outer (8) radius.
        assert_eq!(layer.pixel(16, 10).unwrap().a, 255);
        assert_eq!(layer.pixel(16, 16).unwrap().a, 0);
        assert_eq!(layer.pixel(16, 4).unwrap().a, 0);
    }

    #[test]
    fn degenerate_circles_draw_nothing() {
        let mut layer = Layer::new(16, 16);
        render_circle(&mut layer, &outline(Vec2::new(8.0, 8.0), 0.0, 2.0));
        render_circle(&mut layer, &outline(Vec2::new(8.0, 8.0), 5.0, 0.0));
        render_circle(&mut layer, &outline(Vec2::new(f32::NAN, 8.0), 5.0, 1.0));
        render_circle(
            &mut layer,
            &CircleCmd::new(Vec2::new(8.0, 8.0), 5.0, Border::new(2.0, Color::transparent())),
        );
        assert!(layer.is_clear());
    }

    #[test]
    fn off_surface_circle_is_clipped() {
        let mut layer = Layer::new(16, 16);
        render_circle(&mut layer, &outline(Vec2::new(-100.0, -100.0), 10.0, 2.0));
        assert!(layer.is_clear());
    }
}
