use crate::coords::Vec2;

/// Ink rectangle of rendered text, relative to the draw origin.
///
/// `x1`/`y1` are exclusive. An empty string (or one with no visible glyphs)
/// measures as the zero box.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct BoundingBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BoundingBox {
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.y1 - self.y0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    /// Smallest box containing both. Empty boxes are ignored.
    pub fn union(self, other: BoundingBox) -> BoundingBox {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        BoundingBox {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }
}

/// Offset that centers `measured` inside `container`: `floor((container - measured) / 2)`.
///
/// Negative when the content is wider than the container.
#[inline]
pub fn center_in(container: u32, measured: i32) -> i32 {
    (container as i32 - measured).div_euclid(2)
}

/// Draw origin that centers `bbox` inside a `width × height` container.
///
/// `vertical_bias` is added to the y coordinate afterwards (negative moves
/// the text up), compensating for ascender/descender asymmetry.
pub fn center_offset(width: u32, height: u32, bbox: BoundingBox, vertical_bias: i32) -> Vec2 {
    let x = center_in(width, bbox.width());
    let y = center_in(height, bbox.height()) + vertical_bias;
    Vec2::new(x as f32, y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_in_floors_like_integer_division() {
        assert_eq!(center_in(1200, 600), 300);
        assert_eq!(center_in(1200, 601), 299);
        assert_eq!(center_in(10, 13), -2);
    }

    #[test]
    fn center_offset_applies_bias() {
        let bbox = BoundingBox::new(3, 10, 43, 70);
        let p = center_offset(128, 128, bbox, -12);
        assert_eq!(p, Vec2::new(44.0, 22.0));
    }

    #[test]
    fn union_ignores_empty() {
        let a = BoundingBox::new(0, 0, 5, 5);
        assert_eq!(a.union(BoundingBox::default()), a);
        assert_eq!(BoundingBox::default().union(a), a);
        assert_eq!(a.union(BoundingBox::new(3, -2, 9, 4)), BoundingBox::new(0, -2, 9, 5));
    }
}
