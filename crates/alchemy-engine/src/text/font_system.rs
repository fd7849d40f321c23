use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

use super::builtin;
use super::BoundingBox;

/// How deep [`FontSystem::find_font_file`] descends below each search directory.
const MAX_SEARCH_DEPTH: u32 = 4;

const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

/// Error returned by [`FontSystem::load_font`] and friends.
///
/// [`FontSystem::resolve`] recovers from it by falling back to the built-in font.
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a face loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Which glyph source a [`Font`] draws from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FontFace {
    Loaded(FontId),
    /// Embedded 5×7 bitmap font. Always available.
    Builtin,
}

/// Renderable font handle: a face plus a pixel size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Font {
    pub face: FontFace,
    /// Size in pixels.
    pub size: f32,
}

impl Font {
    #[inline]
    pub const fn builtin(size: f32) -> Self {
        Self { face: FontFace::Builtin, size }
    }

    #[inline]
    pub fn is_builtin(self) -> bool {
        self.face == FontFace::Builtin
    }
}

/// Ordered font preference: the first family that loads wins.
///
/// A family is either a path to a font file or a file stem looked up in the
/// search directories (`"arial"` and `"arial.ttf"` both match `Arial.ttf`).
#[derive(Debug, Clone, PartialEq)]
pub struct FontRequest {
    pub families: Vec<String>,
    pub size: f32,
}

impl FontRequest {
    pub fn new<I, S>(families: I, size: f32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            families: families.into_iter().map(Into::into).collect(),
            size,
        }
    }
}

/// Owns the loaded TrueType faces and the directories searched for them.
///
/// Faces are immutable after loading and cached by path, so resolving the
/// same family at several sizes parses the file once. Text layout is never
/// cached: every measurement lays the string out afresh.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
    by_path: HashMap<PathBuf, FontId>,
    search_dirs: Vec<PathBuf>,
}

impl FontSystem {
    /// Searches the usual per-platform font directories.
    pub fn new() -> Self {
        Self::with_search_dirs(default_font_dirs())
    }

    pub fn with_search_dirs(search_dirs: Vec<PathBuf>) -> Self {
        Self {
            fonts: Vec::new(),
            by_path: HashMap::new(),
            search_dirs,
        }
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    /// Loads a font file, reusing the face if this path was loaded before.
    pub fn load_font_file(&mut self, path: &Path) -> Result<FontId, FontLoadError> {
        if let Some(&id) = self.by_path.get(path) {
            return Ok(id);
        }
        let bytes = fs::read(path).map_err(|e| FontLoadError(format!("{}: {e}", path.display())))?;
        let id = self
            .load_font(&bytes)
            .map_err(|e| FontLoadError(format!("{}: {}", path.display(), e.0)))?;
        log::debug!("loaded font {}", path.display());
        self.by_path.insert(path.to_path_buf(), id);
        Ok(id)
    }

    /// Locates the file for `family`: an existing path, else a font file
    /// whose stem matches case-insensitively under the search directories.
    pub fn find_font_file(&self, family: &str) -> Option<PathBuf> {
        let direct = Path::new(family);
        if direct.is_file() {
            return Some(direct.to_path_buf());
        }

        let stem = direct.file_stem()?.to_str()?.to_ascii_lowercase();
        self.search_dirs
            .iter()
            .find_map(|dir| find_in_dir(dir, &stem, MAX_SEARCH_DEPTH))
    }

    /// Resolves `request` to a renderable font. Never fails.
    ///
    /// Families are tried in order; each failure is logged and skipped. When
    /// none loads, the built-in bitmap font is returned at the requested size.
    /// Layout against the fallback uses the fallback's own metrics, so
    /// centering computed from [`measure_text`](Self::measure_text) stays correct.
    pub fn resolve(&mut self, request: &FontRequest) -> Font {
        for family in &request.families {
            let loaded = self
                .find_font_file(family)
                .ok_or_else(|| FontLoadError(format!("'{family}' not found in font directories")))
                .and_then(|path| self.load_font_file(&path));

            match loaded {
                Ok(id) => {
                    return Font { face: FontFace::Loaded(id), size: request.size };
                }
                Err(e) => log::warn!("{e}"),
            }
        }

        log::warn!(
            "no font from {:?} available; using built-in font at {}px",
            request.families,
            request.size
        );
        Font::builtin(request.size)
    }

    /// Returns the underlying `fontdue::Font`, if `id` is valid.
    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Ink bounds of `text` drawn at the origin with `font`.
    #[must_use]
    pub fn measure_text(&self, text: &str, font: Font) -> BoundingBox {
        self.place(text, font).bounds()
    }

    /// Lays out `text` at the origin, snapping glyphs to whole pixels.
    ///
    /// Shared by measurement and rendering so both agree on every pixel.
    pub(crate) fn place<'a>(&'a self, text: &'a str, font: Font) -> PlacedGlyphs<'a> {
        if text.is_empty() || !(font.size > 0.0) || !font.size.is_finite() {
            return PlacedGlyphs::Empty;
        }

        let face = match font.face {
            FontFace::Builtin => None,
            FontFace::Loaded(id) => {
                let face = self.get(id);
                if face.is_none() {
                    log::warn!("unknown {id:?}; drawing with built-in font");
                }
                face
            }
        };

        let Some(face) = face else {
            return PlacedGlyphs::Builtin { text, scale: builtin::scale_for(font.size) };
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[face], &TextStyle::new(text, font.size, 0));

        let glyphs = layout
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
            .map(|g| PlacedGlyph {
                key: g.key,
                x: g.x.round() as i32,
                y: g.y.round() as i32,
                width: g.width as i32,
                height: g.height as i32,
            })
            .collect();

        PlacedGlyphs::Outline { face, glyphs }
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) struct PlacedGlyph {
    key: GlyphRasterConfig,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

/// Text laid out relative to the origin, ready to measure or rasterize.
pub(crate) enum PlacedGlyphs<'a> {
    Empty,
    Outline { face: &'a fontdue::Font, glyphs: Vec<PlacedGlyph> },
    Builtin { text: &'a str, scale: i32 },
}

impl PlacedGlyphs<'_> {
    pub(crate) fn bounds(&self) -> BoundingBox {
        match self {
            PlacedGlyphs::Empty => BoundingBox::default(),
            PlacedGlyphs::Outline { glyphs, .. } => glyphs.iter().fold(BoundingBox::default(), |acc, g| {
                acc.union(BoundingBox::new(g.x, g.y, g.x + g.width, g.y + g.height))
            }),
            PlacedGlyphs::Builtin { text, scale } => {
                let mut acc = BoundingBox::default();
                builtin::for_each_dot(text, *scale, |x, y| {
                    acc = acc.union(BoundingBox::new(x, y, x + scale, y + scale));
                });
                acc
            }
        }
    }

    /// Calls `f(x, y, coverage)` for every pixel with non-zero coverage.
    pub(crate) fn for_each_pixel(&self, mut f: impl FnMut(i32, i32, f32)) {
        match self {
            PlacedGlyphs::Empty => {}
            PlacedGlyphs::Outline { face, glyphs } => {
                for g in glyphs {
                    let (metrics, bitmap) = face.rasterize_config(g.key);
                    for row in 0..metrics.height {
                        for col in 0..metrics.width {
                            let c = bitmap[row * metrics.width + col];
                            if c != 0 {
                                f(g.x + col as i32, g.y + row as i32, c as f32 / 255.0);
                            }
                        }
                    }
                }
            }
            PlacedGlyphs::Builtin { text, scale } => {
                builtin::for_each_dot(text, *scale, |x, y| {
                    for dy in 0..*scale {
                        for dx in 0..*scale {
                            f(x + dx, y + dy, 1.0);
                        }
                    }
                });
            }
        }
    }
}

fn default_font_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = [
        "/usr/share/fonts",
        "/usr/local/share/fonts",
        "/Library/Fonts",
        "/System/Library/Fonts",
        "C:\\Windows\\Fonts",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();

    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        dirs.push(home.join(".local/share/fonts"));
        dirs.push(home.join(".fonts"));
        dirs.push(home.join("Library/Fonts"));
    }
    dirs
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| FONT_EXTENSIONS.iter().any(|f| e.eq_ignore_ascii_case(f)))
}

fn find_in_dir(dir: &Path, stem: &str, depth: u32) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;

    let mut subdirs = Vec::new();
    let mut matches = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        } else if is_font_file(&path)
            && path
                .file_stem()
                .and_then(|s| s.to_str())
                .is_some_and(|s| s.eq_ignore_ascii_case(stem))
        {
            matches.push(path);
        }
    }

    // read_dir order is unspecified; sort for reproducible picks.
    matches.sort();
    if let Some(found) = matches.into_iter().next() {
        return Some(found);
    }
    if depth == 0 {
        return None;
    }
    subdirs.sort();
    subdirs.iter().find_map(|d| find_in_dir(d, stem, depth - 1))
}
