//! Font resolution, text measurement and centering.
//!
//! Fonts are resolved once per request through [`FontSystem::resolve`], which
//! always returns something renderable: a TrueType face when one can be found
//! and parsed, otherwise the embedded bitmap font.

mod builtin;
mod font_system;
mod layout;

pub use font_system::{Font, FontFace, FontId, FontLoadError, FontRequest, FontSystem};
pub use layout::{center_in, center_offset, BoundingBox};
