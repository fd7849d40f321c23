use crate::coords::{pixel_center, Rect};
use crate::render::RenderTarget;
use crate::scene::shapes::LineCmd;

use super::edge_coverage;

/// Rasterizes a round-capped stroke of `cmd.width` around the segment.
pub fn render_line(target: &mut dyn RenderTarget, cmd: &LineCmd) {
    if !(cmd.width > 0.0) || cmd.color.a == 0 || !cmd.from.is_finite() || !cmd.to.is_finite() {
        return;
    }

    let half = cmd.width / 2.0;
    let pad = half + 1.0;
    let bounds = Rect::from_ltrb(
        cmd.from.x.min(cmd.to.x) - pad,
        cmd.from.y.min(cmd.to.y) - pad,
        cmd.from.x.max(cmd.to.x) + pad,
        cmd.from.y.max(cmd.to.y) + pad,
    );

    let (w, h) = target.dimensions();
    let Some(span) = bounds.pixel_span(w, h) else { return };

    for y in span.y0..span.y1 {
        for x in span.x0..span.x1 {
            let d = pixel_center(x as i32, y as i32).distance_to_segment(cmd.from, cmd.to);
            let coverage = edge_coverage(half - d);
            if coverage > 0.0 {
                target.blend_pixel(x, y, cmd.color, coverage);
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

    fn lit(layer: &Layer) -> Vec<(u32, u32)> {
        let mut out = Vec::new();
        for y in 0..layer.height() {
            for x in 0..layer.width() {
                if layer.pixel(x, y).unwrap().a > 0 {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn hairline_on_pixel_centers_is_crisp() {
        let mut layer = Layer::new(20, 10);
        let cmd = LineCmd {
            from: pixel_center(2, 4),
            to: pixel_center(12, 4),
            width: 1.0,
            color: Color::white(),
        };
        render_line(&mut layer, &cmd);

        let pixels = lit(&layer);
        assert_eq!(pixels, (2..=12).map(|x| (x, 4)).collect::<Vec<_>>());
        assert!(pixels.iter().all(|&(x, y)| layer.pixel(x, y).unwrap().a == 255));
    }

    #[test]
    fn vertical_hairline() {
        let mut layer = Layer::new(10, 20);
        let cmd = LineCmd {
            from: pixel_center(3, 1),
            to: pixel_center(3, 6),
            width: 1.0,
            color: Color::white().with_alpha(100),
        };
        render_line(&mut layer, &cmd);
        assert_eq!(lit(&layer), (1..=6).map(|y| (3, y)).collect::<Vec<_>>());
        assert_eq!(layer.pixel(3, 3).unwrap().a, 100);
    }

    #[test]
    fn zero_width_draws_nothing() {
        let mut layer = Layer::new(10, 10);
        render_line(&mut layer, &LineCmd {
            from: Vec2::new(1.0, 1.0),
            to: Vec2::new(8.0, 8.0),
            width: 0.0,
            color: Color::white(),
        });
        assert!(layer.is_clear());
    }
}
