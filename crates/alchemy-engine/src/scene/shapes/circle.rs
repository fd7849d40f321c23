use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Circle outline payload: a ring between `radius - border.width` and `radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub border: Border,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, border: Border) -> Self {
        Self { center, radius, border }
    }
}

/// Concentric rings that shrink and gain opacity toward the center.
///
/// Ring `i` (0-based) has radius `start_radius - i * radius_step` and alpha
/// `start_alpha + i * alpha_step` (saturating at 255).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RingStack {
    pub center: Vec2,
    pub start_radius: f32,
    pub radius_step: f32,
    pub count: u32,
    pub stroke_width: f32,
    pub color: Color,
    pub start_alpha: u8,
    pub alpha_step: u8,
}

impl RingStack {
    /// `(radius, alpha)` of every ring, outermost first.
    ///
    /// Rings whose radius would drop to zero or below are skipped.
    pub fn rings(&self) -> impl Iterator<Item = (f32, u8)> + '_ {
        (0..self.count).filter_map(move |i| {
            let radius = self.start_radius - i as f32 * self.radius_step;
            let steps = u8::try_from(i).unwrap_or(u8::MAX);
            let alpha = self.start_alpha.saturating_add(self.alpha_step.saturating_mul(steps));
            (radius > 0.0).then_some((radius, alpha))
        })
    }
}

impl DrawList {
    /// Records a circle outline `width` pixels wide, drawn inward from `radius`.
    #[inline]
    pub fn push_circle_outline(&mut self, z: ZIndex, center: Vec2, radius: f32, width: f32, color: Color) {
        self.push(z, DrawCmd::Circle(CircleCmd::new(center, radius, Border::new(width, color))));
    }

    /// Records one outline per ring of `stack`, outermost first.
    pub fn push_ring_stack(&mut self, z: ZIndex, stack: &RingStack) {
        for (radius, alpha) in stack.rings() {
            self.push_circle_outline(z, stack.center, radius, stack.stroke_width, stack.color.with_alpha(alpha));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poster_rings() -> RingStack {
        RingStack {
            center: Vec2::new(600.5, 800.5),
            start_radius: 280.0,
            radius_step: 40.0,
            count: 3,
            stroke_width: 2.0,
            color: Color::white(),
            start_alpha: 60,
            alpha_step: 30,
        }
    }

    #[test]
    fn rings_shrink_and_brighten() {
        let rings: Vec<_> = poster_rings().rings().collect();
        assert_eq!(rings, vec![(280.0, 60), (240.0, 90), (200.0, 120)]);
    }

    #[test]
    fn rings_saturate_alpha_and_skip_collapsed() {
        let stack = RingStack { start_radius: 50.0, radius_step: 20.0, count: 5, start_alpha: 200, alpha_step: 40, ..poster_rings() };
        let rings: Vec<_> = stack.rings().collect();
        assert_eq!(rings, vec![(50.0, 200), (30.0, 240), (10.0, 255)]);
    }

    #[test]
    fn push_ring_stack_records_outlines() {
        let mut list = DrawList::new();
        list.push_ring_stack(ZIndex(0), &poster_rings());
        assert_eq!(list.items().len(), 3);
        match &list.items()[2].cmd {
            DrawCmd::Circle(c) => {
                assert_eq!(c.radius, 200.0);
                assert_eq!(c.border, Border::new(2.0, Color::rgba(255, 255, 255, 120)));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
