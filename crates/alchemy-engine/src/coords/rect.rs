use super::Vec2;

/// Axis-aligned rectangle in pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

/// Integer pixel range `[x0, x1) × [y0, y1)` clipped to a surface.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PixelSpan {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl PixelSpan {
    #[inline]
    pub fn width(self) -> u32 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(self) -> u32 {
        self.y1 - self.y0
    }
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Builds a rect from left/top/right/bottom edges.
    #[inline]
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Rect::new(left, top, right - left, bottom - top)
    }

    /// Square of side `2 * radius` centered on `center`.
    #[inline]
    pub fn around(center: Vec2, radius: f32) -> Self {
        Rect::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Pixels touched by this rect on a `width × height` surface.
    ///
    /// Returns `None` when the rect is empty, non-finite, or entirely off-surface.
    pub fn pixel_span(self, width: u32, height: u32) -> Option<PixelSpan> {
        if self.is_empty() || !self.is_finite() {
            return None;
        }
        let clip = |v: f32, max: u32| v.clamp(0.0, max as f32) as u32;
        let span = PixelSpan {
            x0: clip(self.origin.x.floor(), width),
            y0: clip(self.origin.y.floor(), height),
            x1: clip(self.right().ceil(), width),
            y1: clip(self.bottom().ceil(), height),
        };
        if span.x1 <= span.x0 || span.y1 <= span.y0 {
            None
        } else {
            Some(span)
        }
    }

    /// Fraction of pixel `(x, y)` covered by this rect, in `[0, 1]`.
    pub fn pixel_coverage(self, x: u32, y: u32) -> f32 {
        let px = x as f32;
        let py = y as f32;
        let cx = (self.right().min(px + 1.0) - self.origin.x.max(px)).max(0.0);
        let cy = (self.bottom().min(py + 1.0) - self.origin.y.max(py)).max(0.0);
        (cx * cy).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── edges ─────────────────────────────────────────────────────────────

    #[test]
    fn ltrb_round_trips_edges() {
        let rect = Rect::from_ltrb(10.0, 20.0, 17.0, 41.0);
        assert_eq!(rect, r(10.0, 20.0, 7.0, 21.0));
        assert_eq!(rect.right(), 17.0);
        assert_eq!(rect.bottom(), 41.0);
    }

    #[test]
    fn around_centers_square() {
        let rect = Rect::around(Vec2::new(600.0, 800.0), 280.0);
        assert_eq!(rect, r(320.0, 520.0, 560.0, 560.0));
    }

    // ── pixel_span ────────────────────────────────────────────────────────

    #[test]
    fn pixel_span_aligned() {
        let span = r(2.0, 3.0, 4.0, 5.0).pixel_span(100, 100).unwrap();
        assert_eq!(span, PixelSpan { x0: 2, y0: 3, x1: 6, y1: 8 });
        assert_eq!((span.width(), span.height()), (4, 5));
    }

    #[test]
    fn pixel_span_rounds_outward() {
        let span = r(2.5, 3.25, 1.0, 1.0).pixel_span(100, 100).unwrap();
        assert_eq!(span, PixelSpan { x0: 2, y0: 3, x1: 4, y1: 5 });
    }

    #[test]
    fn pixel_span_clips_to_surface() {
        let span = r(-5.0, -5.0, 20.0, 20.0).pixel_span(8, 8).unwrap();
        assert_eq!(span, PixelSpan { x0: 0, y0: 0, x1: 8, y1: 8 });
    }

    #[test]
    fn pixel_span_off_surface_is_none() {
        assert!(r(50.0, 50.0, 5.0, 5.0).pixel_span(10, 10).is_none());
        assert!(r(0.0, 0.0, 0.0, 5.0).pixel_span(10, 10).is_none());
    }

    // ── pixel_coverage ────────────────────────────────────────────────────

    #[test]
    fn coverage_full_inside_zero_outside() {
        let rect = r(2.0, 2.0, 3.0, 3.0);
        assert_eq!(rect.pixel_coverage(3, 3), 1.0);
        assert_eq!(rect.pixel_coverage(5, 3), 0.0);
        assert_eq!(rect.pixel_coverage(1, 3), 0.0);
    }

    #[test]
    fn coverage_partial_edge() {
        let rect = r(2.5, 2.0, 3.0, 3.0);
        assert_eq!(rect.pixel_coverage(2, 2), 0.5);
        assert_eq!(rect.pixel_coverage(5, 2), 0.5);
    }
}
