//! Overlay shape recording.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic paint order (z-index + insertion order)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList, ZIndex};
pub use shapes::circle::RingStack;
pub use shapes::Border;
