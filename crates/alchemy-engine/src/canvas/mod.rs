//! Raster surfaces and their serialization.
//!
//! - [`Canvas`]: opaque RGB8 target every pipeline stage mutates in place
//! - [`Layer`]: transparent RGBA8 scratch surface for alpha overlays
//! - [`export`]: PNG/JPEG/BMP writers with DPI metadata and no-partial-file semantics

pub mod blend;
mod error;
pub mod export;
mod layer;
mod surface;

pub use error::CompositeError;
pub use export::{ExportError, ExportFormat, ExportOptions};
pub use layer::Layer;
pub use surface::Canvas;
