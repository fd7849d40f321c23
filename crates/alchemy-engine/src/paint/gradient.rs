use super::Color;

/// One band of a vertical gradient.
///
/// Semantics:
/// - covers scanlines `y_start..y_end` (half-open)
/// - scanline `y` is painted with `from.lerp(to, (y - y_start) / (y_end - y_start))`
/// - channels are truncated, never rounded
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GradientSegment {
    pub y_start: u32,
    pub y_end: u32,
    pub from: Color,
    pub to: Color,
}

impl GradientSegment {
    #[inline]
    pub const fn new(y_start: u32, y_end: u32, from: Color, to: Color) -> Self {
        Self { y_start, y_end, from, to }
    }

    /// Interpolation parameter for scanline `y`, clamped to `[0, 1]`.
    #[inline]
    pub fn ratio(&self, y: u32) -> f64 {
        if self.y_end <= self.y_start {
            return 0.0;
        }
        let t = (y as f64 - self.y_start as f64) / (self.y_end - self.y_start) as f64;
        t.clamp(0.0, 1.0)
    }

    /// Color painted on scanline `y`.
    #[inline]
    pub fn color_at(&self, y: u32) -> Color {
        self.from.lerp(self.to, self.ratio(y))
    }

    #[inline]
    pub fn contains(&self, y: u32) -> bool {
        y >= self.y_start && y < self.y_end
    }
}

/// Ordered list of gradient segments.
///
/// Segments are painted in order, so a later segment overwrites an earlier one
/// wherever their bands overlap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerticalGradient {
    pub segments: Vec<GradientSegment>,
}

impl VerticalGradient {
    pub fn new(segments: Vec<GradientSegment>) -> Self {
        Self { segments }
    }

    /// Single segment spanning `0..height`.
    pub fn full(height: u32, from: Color, to: Color) -> Self {
        Self::new(vec![GradientSegment::new(0, height, from, to)])
    }

    /// Appends a segment painted after the existing ones.
    pub fn then(mut self, segment: GradientSegment) -> Self {
        self.segments.push(segment);
        self
    }

    /// Final color of scanline `y` once every segment has been painted.
    ///
    /// Returns `None` when no segment covers `y`.
    pub fn color_at(&self, y: u32) -> Option<Color> {
        self.segments
            .iter()
            .rev()
            .find(|s| s.contains(y))
            .map(|s| s.color_at(y))
    }
}
