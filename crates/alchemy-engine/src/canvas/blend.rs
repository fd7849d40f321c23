//! 8-bit blending math.
//!
//! All colors are straight alpha. Coverage comes from rasterizers in `[0, 1]`
//! and is folded into the source alpha before blending.

/// Source alpha after applying rasterizer coverage.
#[inline]
pub fn effective_alpha(alpha: u8, coverage: f32) -> u8 {
    let coverage = if coverage.is_nan() { 0.0 } else { coverage.clamp(0.0, 1.0) };
    (alpha as f32 * coverage).round() as u8
}

/// Blends one channel of `src` at alpha `a` over an opaque `dst` channel.
///
/// `a == 255` returns `src`, `a == 0` returns `dst`.
#[inline]
pub fn blend_channel(src: u8, dst: u8, a: u8) -> u8 {
    let a = a as u32;
    ((src as u32 * a + dst as u32 * (255 - a) + 127) / 255) as u8
}

/// Blends `src` at alpha `a` over an opaque RGB pixel.
#[inline]
pub fn blend_over_opaque(dst: [u8; 3], src: [u8; 3], a: u8) -> [u8; 3] {
    [
        blend_channel(src[0], dst[0], a),
        blend_channel(src[1], dst[1], a),
        blend_channel(src[2], dst[2], a),
    ]
}

/// Porter-Duff source-over for straight-alpha RGBA pixels.
pub fn source_over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return [0, 0, 0, 0];
    }
    let ch = |s: u8, d: u8| {
        let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        v.round().clamp(0.0, 255.0) as u8
    };
    [
        ch(src[0], dst[0]),
        ch(src[1], dst[1]),
        ch(src[2], dst[2]),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ]
}
