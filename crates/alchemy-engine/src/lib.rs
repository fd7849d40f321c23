//! Alchemy engine crate.
//!
//! Software compositor for fixed-layout raster artwork: opaque canvases,
//! vertical gradients, alpha-blended shape overlays, measured text and
//! PNG export with DPI metadata.
//!
//! A typical pipeline is a straight line of calls on one [`Canvas`]:
//!
//! ```no_run
//! use alchemy_engine::canvas::{Canvas, ExportOptions};
//! use alchemy_engine::paint::{Color, GradientSegment};
//! use alchemy_engine::text::{center_in, FontRequest, FontSystem};
//! use alchemy_engine::coords::Vec2;
//!
//! let mut fonts = FontSystem::new();
//! let mut canvas = Canvas::new(128, 128, Color::white());
//! canvas.paint_vertical_gradient(&GradientSegment::new(
//!     0, 128, Color::rgb(102, 126, 234), Color::rgb(118, 75, 162),
//! ))?;
//! let font = fonts.resolve(&FontRequest::new(["arial"], 76.0));
//! let bbox = fonts.measure_text("S", font);
//! let x = center_in(128, bbox.width()) as f32;
//! canvas.draw_text(&fonts, "S", Vec2::new(x, 10.0), font, Color::white());
//! canvas.export("icon128.png", &ExportOptions::png())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`Canvas`]: canvas::Canvas

pub mod canvas;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
