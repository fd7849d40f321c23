/// Straight-alpha sRGB color with 8-bit channels.
///
/// Invariant:
/// - `r`, `g`, `b` are NOT multiplied by `a`.
///
/// Rationale:
/// - Palette constants and computed gradient colors are plain byte triples.
/// - Alpha only matters at blend time, where it is combined with coverage.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::transparent()
    }
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// Fully opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same RGB with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    #[inline]
    pub const fn to_rgb_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Per-channel linear blend `self·(1−t) + other·t`, truncated toward zero.
    ///
    /// `t` is clamped to `[0, 1]`. Alpha is blended the same way.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t) as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

impl From<image::Rgb<u8>> for Color {
    #[inline]
    fn from(p: image::Rgb<u8>) -> Self {
        Color::rgb(p.0[0], p.0[1], p.0[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = Color::rgb(102, 126, 234);
        let b = Color::rgb(118, 75, 162);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_truncates() {
        // 102 + 16 * 0.5 = 110.0 exactly; 126 - 51 * 0.5 = 100.5 -> 100
        let c = Color::rgb(102, 126, 234).lerp(Color::rgb(118, 75, 162), 0.5);
        assert_eq!((c.r, c.g, c.b), (110, 100, 198));
    }

    #[test]
    fn lerp_clamps_t() {
        let a = Color::rgb(0, 0, 0);
        let b = Color::rgb(200, 100, 50);
        assert_eq!(a.lerp(b, -3.0), a);
        assert_eq!(a.lerp(b, 7.0), b);
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = Color::white().with_alpha(60);
        assert_eq!(c, Color::rgba(255, 255, 255, 60));
        assert_eq!(c.to_rgb_array(), [255, 255, 255]);
    }
}
