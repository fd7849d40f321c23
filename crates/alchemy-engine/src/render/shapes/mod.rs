//! Shape rasterizers.

pub mod circle;
pub mod line;
pub mod rect;
pub mod text;

/// Coverage of an edge at signed distance `d` (positive = inside), with a
/// one-pixel linear ramp centered on the edge.
#[inline]
pub(crate) fn edge_coverage(d: f32) -> f32 {
    (d + 0.5).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_coverage_ramps_over_one_pixel() {
        assert_eq!(edge_coverage(-1.0), 0.0);
        assert_eq!(edge_coverage(-0.5), 0.0);
        assert_eq!(edge_coverage(0.0), 0.5);
        assert_eq!(edge_coverage(0.5), 1.0);
        assert_eq!(edge_coverage(3.0), 1.0);
    }
}
