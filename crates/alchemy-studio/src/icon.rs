//! Square extension icons: a vertical gradient with one centered glyph.

use std::path::{Path, PathBuf};

use anyhow::Context;

use alchemy_engine::canvas::{Canvas, ExportOptions};
use alchemy_engine::paint::{Color, VerticalGradient};
use alchemy_engine::text::{center_offset, Font, FontRequest, FontSystem};

use crate::Palette;

/// Icon sizes shipped with the browser extension.
pub const STANDARD_SIZES: [u32; 3] = [16, 48, 128];

#[derive(Debug, Clone, PartialEq)]
pub struct IconConfig {
    /// Edge length in pixels.
    pub size: u32,
    pub output: PathBuf,
    pub glyph: String,
    /// Font size as a fraction of `size`.
    pub glyph_scale: f32,
    pub background: Color,
    pub gradient_from: Color,
    pub gradient_to: Color,
    pub glyph_color: Color,
    pub font_families: Vec<String>,
}

impl IconConfig {
    pub fn new(size: u32, output: impl Into<PathBuf>) -> Self {
        let palette = Palette::default();
        Self {
            size,
            output: output.into(),
            glyph: "S".into(),
            glyph_scale: 0.6,
            background: palette.white,
            gradient_from: palette.deep_purple,
            gradient_to: palette.violet,
            glyph_color: palette.white,
            font_families: vec!["arial".into(), "DejaVuSans".into()],
        }
    }

    /// One config per [`STANDARD_SIZES`] entry, written as `icon<size>.png` under `dir`.
    pub fn standard_set(dir: impl AsRef<Path>) -> Vec<IconConfig> {
        let dir = dir.as_ref();
        STANDARD_SIZES
            .iter()
            .map(|&size| IconConfig::new(size, dir.join(format!("icon{size}.png"))))
            .collect()
    }

    /// Font size in whole pixels, truncated.
    pub fn glyph_size(&self) -> f32 {
        (self.size as f32 * self.glyph_scale).trunc()
    }

    /// Glyph nudge upward, a tenth of the icon size.
    pub fn vertical_bias(&self) -> i32 {
        -((self.size / 10) as i32)
    }

    pub fn background_gradient(&self) -> VerticalGradient {
        VerticalGradient::full(self.size, self.gradient_from, self.gradient_to)
    }

    fn font(&self, fonts: &mut FontSystem) -> Font {
        fonts.resolve(&FontRequest::new(self.font_families.iter().cloned(), self.glyph_size()))
    }
}

pub fn render_icon(config: &IconConfig, fonts: &mut FontSystem) -> anyhow::Result<Canvas> {
    let mut canvas = Canvas::new(config.size, config.size, config.background);
    canvas
        .paint_gradient(&config.background_gradient())
        .with_context(|| format!("painting {0}x{0} icon background", config.size))?;

    let font = config.font(fonts);
    let bbox = fonts.measure_text(&config.glyph, font);
    let origin = center_offset(config.size, config.size, bbox, config.vertical_bias());
    canvas.draw_text(fonts, &config.glyph, origin, font, config.glyph_color);

    Ok(canvas)
}

/// Renders one icon and writes it to `config.output`.
pub fn generate_icon(config: &IconConfig, fonts: &mut FontSystem) -> anyhow::Result<()> {
    let canvas = render_icon(config, fonts)?;
    canvas
        .export(&config.output, &ExportOptions::png())
        .with_context(|| format!("exporting icon to {}", config.output.display()))?;
    Ok(())
}

/// Generates every icon in order, stopping at the first failure.
///
/// Returns the written paths.
pub fn generate_icons(configs: &[IconConfig], fonts: &mut FontSystem) -> anyhow::Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(configs.len());
    for config in configs {
        generate_icon(config, fonts)?;
        written.push(config.output.clone());
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn offline_fonts() -> FontSystem {
        FontSystem::with_search_dirs(Vec::new())
    }

    #[test]
    fn standard_set_names_files_by_size() {
        let set = IconConfig::standard_set("icons");
        let names: Vec<_> = set.iter().map(|c| (c.size, c.output.clone())).collect();
        assert_eq!(
            names,
            vec![
                (16, PathBuf::from("icons/icon16.png")),
                (48, PathBuf::from("icons/icon48.png")),
                (128, PathBuf::from("icons/icon128.png")),
            ]
        );
    }

    #[test]
    fn glyph_metrics_follow_size() {
        let c = IconConfig::new(48, "x.png");
        assert_eq!(c.glyph_size(), 28.0);
        assert_eq!(c.vertical_bias(), -4);
        assert_eq!(IconConfig::new(16, "x.png").vertical_bias(), -1);
    }

    #[test]
    fn corners_show_the_gradient() {
        let config = IconConfig::new(128, "unused.png");
        let canvas = render_icon(&config, &mut offline_fonts()).unwrap();
        let gradient = config.background_gradient();

        assert_eq!((canvas.width(), canvas.height()), (128, 128));
        assert_eq!(canvas.pixel(0, 0), gradient.color_at(0));
        assert_eq!(canvas.pixel(0, 0), Some(config.gradient_from));
        assert_eq!(canvas.pixel(0, 127), gradient.color_at(127));
        assert_eq!(canvas.pixel(127, 127), gradient.color_at(127));
    }

    #[test]
    fn glyph_is_drawn_near_the_middle() {
        let config = IconConfig::new(128, "unused.png");
        let mut fonts = offline_fonts();
        let canvas = render_icon(&config, &mut fonts).unwrap();

        let lit = (0..128u32)
            .flat_map(|y| (0..128u32).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.pixel(x, y) == Some(Color::white()))
            .count();
        assert!(lit > 0);

        // Ink must not touch the border.
        for i in 0..128 {
            assert_ne!(canvas.pixel(i, 0), Some(Color::white()));
            assert_ne!(canvas.pixel(0, i), Some(Color::white()));
        }
    }

    #[test]
    fn generate_icons_writes_every_size() {
        let dir = std::env::temp_dir().join(format!("alchemy-icons-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        let configs = IconConfig::standard_set(&dir);
        let written = generate_icons(&configs, &mut offline_fonts()).unwrap();
        assert_eq!(written.len(), 3);

        for (config, path) in configs.iter().zip(&written) {
            let img = image::open(path).unwrap();
            assert_eq!((img.width(), img.height()), (config.size, config.size));
            assert_eq!(img.color(), image::ColorType::Rgb8);
        }
        fs::remove_dir_all(&dir).unwrap();
    }
}
