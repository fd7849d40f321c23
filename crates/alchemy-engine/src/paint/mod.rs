//! Paint model shared between the compositor and shape rasterizers.
//!
//! Scope:
//! - color representation (straight-alpha RGBA8)
//! - vertical gradient bands
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{GradientSegment, VerticalGradient};
