use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Straight stroke between two points.
///
/// The stroke extends `width / 2` on each side of the segment and past each
/// endpoint (round caps).
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Color,
}

impl DrawList {
    /// Records a line segment.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push(z, DrawCmd::Line(LineCmd { from, to, width, color }));
    }

    /// Records an L-shaped corner tick: one arm along x, one along y, both
    /// starting at `corner`. Negative lengths point left/up.
    pub fn push_corner_tick(
        &mut self,
        z: ZIndex,
        corner: Vec2,
        arm_x: f32,
        arm_y: f32,
        width: f32,
        color: Color,
    ) {
        self.push_line(z, corner, Vec2::new(corner.x + arm_x, corner.y), width, color);
        self.push_line(z, corner, Vec2::new(corner.x, corner.y + arm_y), width, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_tick_records_two_arms() {
        let mut list = DrawList::new();
        list.push_corner_tick(ZIndex(0), Vec2::new(40.5, 40.5), 30.0, 30.0, 1.0, Color::white());
        let ends: Vec<_> = list
            .items()
            .iter()
            .map(|item| match &item.cmd {
                DrawCmd::Line(l) => (l.from, l.to),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(
            ends,
            vec![
                (Vec2::new(40.5, 40.5), Vec2::new(70.5, 40.5)),
                (Vec2::new(40.5, 40.5), Vec2::new(40.5, 70.5)),
            ]
        );
    }
}
