//! The "SORA 2" poster.
//!
//! Layer order: two-stage gradient, concentric translucent rings, title over
//! an opaque offset shadow, tagline, feature list with accent bars, footer, caption,
//! corner ticks.

use std::fmt;
use std::path::PathBuf;

use anyhow::Context;

use alchemy_engine::canvas::{Canvas, ExportOptions};
use alchemy_engine::coords::{pixel_center, Rect, Vec2};
use alchemy_engine::paint::{GradientSegment, VerticalGradient};
use alchemy_engine::scene::{DrawList, RingStack, ZIndex};
use alchemy_engine::text::{center_in, Font, FontRequest, FontSystem};

use crate::Palette;

/// A text label: content plus font size in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpec {
    pub text: String,
    pub size: f32,
}

impl TextSpec {
    pub fn new(text: impl Into<String>, size: f32) -> Self {
        Self { text: text.into(), size }
    }
}

/// Concentric rings around the canvas center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RingSpec {
    pub start_radius: f32,
    pub radius_step: f32,
    pub count: u32,
    pub stroke_width: f32,
    pub start_alpha: u8,
    pub alpha_step: u8,
}

/// Bulleted feature list anchored above the footer.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureListSpec {
    pub items: Vec<String>,
    pub size: f32,
    /// Distance from the bottom edge to the first row.
    pub from_bottom: u32,
    pub spacing: u32,
    /// Accent bar x, relative to the horizontal center.
    pub accent_offset_x: i32,
    pub accent_width: f32,
    pub accent_height: f32,
    /// Gap between the accent bar's left edge and the label.
    pub label_gap: f32,
}

/// L-shaped ticks in the top corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerSpec {
    pub length: f32,
    pub offset: i32,
    pub width: f32,
}

/// Everything the poster pipeline needs. `Default` is the shipped poster.
#[derive(Debug, Clone, PartialEq)]
pub struct PosterConfig {
    pub width: u32,
    pub height: u32,
    pub dpi: u32,
    pub quality: u8,
    pub output: PathBuf,
    pub palette: Palette,
    /// Preferred font families, tried in order before the built-in font.
    pub font_families: Vec<String>,
    pub rings: RingSpec,
    pub title: TextSpec,
    /// Title top relative to the vertical center.
    pub title_offset_y: i32,
    pub shadow_offset: (i32, i32),
    pub tagline: TextSpec,
    pub tagline_y: i32,
    pub features: FeatureListSpec,
    pub footer: TextSpec,
    pub footer_from_bottom: u32,
    pub caption: TextSpec,
    pub caption_from_bottom: u32,
    pub markers: MarkerSpec,
}

impl Default for PosterConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 1600,
            dpi: 300,
            quality: 100,
            output: PathBuf::from("public/sora2-poster-canvas.png"),
            palette: Palette::default(),
            font_families: vec!["arial".into(), "DejaVuSans".into()],
            rings: RingSpec {
                start_radius: 280.0,
                radius_step: 40.0,
                count: 3,
                stroke_width: 2.0,
                start_alpha: 60,
                alpha_step: 30,
            },
            title: TextSpec::new("SORA 2", 180.0),
            title_offset_y: -100,
            shadow_offset: (3, 3),
            tagline: TextSpec::new("AI VIDEO GENERATION", 32.0),
            tagline_y: 120,
            features: FeatureListSpec {
                items: vec![
                    "8K PHOTOREALISTIC".into(),
                    "CINEMATIC LIGHTING".into(),
                    "INSTANT PROCESSING".into(),
                    "WATERMARK REMOVAL".into(),
                ],
                size: 20.0,
                from_bottom: 280,
                spacing: 50,
                accent_offset_x: -180,
                accent_width: 7.0,
                accent_height: 21.0,
                label_gap: 20.0,
            },
            footer: TextSpec::new("REMOVEWM.COM", 20.0),
            footer_from_bottom: 80,
            caption: TextSpec::new("Transform words into cinematic reality", 14.0),
            caption_from_bottom: 50,
            markers: MarkerSpec { length: 30.0, offset: 40, width: 1.0 },
        }
    }
}

impl PosterConfig {
    /// Background: top-to-bottom purple→violet, then violet→pink over the lower half.
    pub fn background(&self) -> VerticalGradient {
        let p = &self.palette;
        VerticalGradient::full(self.height, p.deep_purple, p.violet)
            .then(GradientSegment::new(self.height / 2, self.height, p.violet, p.pink))
    }

    pub fn ring_stack(&self) -> RingStack {
        RingStack {
            center: pixel_center((self.width / 2) as i32, (self.height / 2) as i32),
            start_radius: self.rings.start_radius,
            radius_step: self.rings.radius_step,
            count: self.rings.count,
            stroke_width: self.rings.stroke_width,
            color: self.palette.white,
            start_alpha: self.rings.start_alpha,
            alpha_step: self.rings.alpha_step,
        }
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions::png().with_dpi(self.dpi).with_quality(self.quality)
    }

    fn font(&self, fonts: &mut FontSystem, size: f32) -> Font {
        fonts.resolve(&FontRequest::new(self.font_families.iter().cloned(), size))
    }
}

/// Horizontal origin that centers `text` on the canvas.
fn centered_x(fonts: &FontSystem, width: u32, text: &str, font: Font) -> f32 {
    center_in(width, fonts.measure_text(text, font).width()) as f32
}

/// A composited poster and the title font it was set in.
#[derive(Debug, Clone)]
pub struct RenderedPoster {
    pub canvas: Canvas,
    pub title_font: Font,
}

/// Composites the poster in memory.
pub fn render_poster(config: &PosterConfig, fonts: &mut FontSystem) -> anyhow::Result<RenderedPoster> {
    let palette = &config.palette;
    let (w, h) = (config.width, config.height);

    let mut canvas = Canvas::new(w, h, palette.ink);
    canvas
        .paint_gradient(&config.background())
        .context("painting poster background")?;

    let mut rings = DrawList::new();
    rings.push_ring_stack(ZIndex(0), &config.ring_stack());
    canvas.draw_alpha_overlay(&mut rings, fonts);

    let title_font = config.font(fonts, config.title.size);
    let tagline_font = config.font(fonts, config.tagline.size);
    let body_font = config.font(fonts, config.features.size);
    let footer_font = config.font(fonts, config.footer.size);
    let caption_font = config.font(fonts, config.caption.size);

    // Title over an offset shadow. Only the rings are translucent.
    let title = &config.title.text;
    let title_x = centered_x(fonts, w, title, title_font);
    let title_y = (h / 2) as i32 + config.title_offset_y;
    let (sx, sy) = config.shadow_offset;
    canvas.draw_text(
        fonts,
        title,
        Vec2::new(title_x + sx as f32, (title_y + sy) as f32),
        title_font,
        palette.ink,
    );
    canvas.draw_text(fonts, title, Vec2::new(title_x, title_y as f32), title_font, palette.white);

    let tagline = &config.tagline.text;
    let tagline_x = centered_x(fonts, w, tagline, tagline_font);
    canvas.draw_text(fonts, tagline, Vec2::new(tagline_x, config.tagline_y as f32), tagline_font, palette.white);

    // Feature rows: accent bar + label.
    let features = &config.features;
    let mut accents = DrawList::new();
    let accent_x = ((w / 2) as i32 + features.accent_offset_x) as f32;
    let first_row = h.saturating_sub(features.from_bottom);
    for (i, item) in features.items.iter().enumerate() {
        let row_y = (first_row + i as u32 * features.spacing) as f32;
        accents.push_solid_rect(
            ZIndex(0),
            Rect::new(accent_x, row_y, features.accent_width, features.accent_height),
            palette.white,
        );
        accents.push_text(
            ZIndex(0),
            item.as_str(),
            body_font,
            palette.white,
            Vec2::new(accent_x + features.label_gap, row_y),
        );
    }

    let footer = &config.footer.text;
    let footer_x = centered_x(fonts, w, footer, footer_font);
    let footer_y = h.saturating_sub(config.footer_from_bottom) as f32;
    accents.push_text(ZIndex(0), footer.as_str(), footer_font, palette.white, Vec2::new(footer_x, footer_y));

    let caption = &config.caption.text;
    let caption_x = centered_x(fonts, w, caption, caption_font);
    let caption_y = h.saturating_sub(config.caption_from_bottom) as f32;
    accents.push_text(
        ZIndex(0),
        caption.as_str(),
        caption_font,
        palette.white,
        Vec2::new(caption_x, caption_y),
    );

    // Corner ticks, top-left and top-right.
    let m = &config.markers;
    let right = w as i32 - m.offset;
    accents.push_corner_tick(ZIndex(1), pixel_center(m.offset, m.offset), m.length, m.length, m.width, palette.white);
    accents.push_corner_tick(ZIndex(1), pixel_center(right, m.offset), -m.length, m.length, m.width, palette.white);

    canvas.draw(&mut accents, fonts);

    log::debug!(
        "poster composed with {} font",
        if title_font.is_builtin() { "built-in" } else { "system" }
    );
    Ok(RenderedPoster { canvas, title_font })
}

/// What [`generate_poster`] produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PosterReport {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub dpi: u32,
    pub quality: u8,
    pub builtin_font: bool,
}

impl fmt::Display for PosterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✓ Poster created: {}", self.path.display())?;
        writeln!(f, "  Dimensions: {}x{}px", self.width, self.height)?;
        writeln!(f, "  DPI: {}", self.dpi)?;
        writeln!(f, "  Quality: {}", self.quality)?;
        writeln!(
            f,
            "  Typeface: {}",
            if self.builtin_font { "built-in bitmap (no system font found)" } else { "system" }
        )
    }
}

/// Renders the poster and writes it to `config.output`.
pub fn generate_poster(config: &PosterConfig, fonts: &mut FontSystem) -> anyhow::Result<PosterReport> {
    let RenderedPoster { canvas, title_font } = render_poster(config, fonts)?;
    canvas
        .export(&config.output, &config.export_options())
        .with_context(|| format!("exporting poster to {}", config.output.display()))?;

    Ok(PosterReport {
        path: config.output.clone(),
        width: canvas.width(),
        height: canvas.height(),
        dpi: config.dpi,
        quality: config.quality,
        builtin_font: title_font.is_builtin(),
    })
}
