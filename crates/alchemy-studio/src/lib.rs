//! Fixed artwork pipelines driven by immutable configuration structs.
//!
//! - [`poster`]: the 1200×1600 "SORA 2" poster
//! - [`icon`]: the square extension icons (16, 48, 128 px)
//!
//! Each pipeline is a straight line of compositor calls; nothing is written
//! to disk until the final export step.

pub mod icon;
pub mod palette;
pub mod poster;

use std::fs;
use std::path::Path;

use anyhow::Context;

pub use palette::Palette;

/// Creates the directory that will hold `output`, if it has one.
pub fn ensure_parent_dir(output: &Path) -> anyhow::Result<()> {
    match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display())),
        _ => Ok(()),
    }
}
