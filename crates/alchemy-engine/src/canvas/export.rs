use std::ffi::OsString;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::{ImageError, RgbImage};

/// Meters per inch, for converting DPI to PNG's pixels-per-meter.
const METERS_PER_INCH: f64 = 0.0254;

/// Output file format.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ExportFormat {
    /// Lossless; carries DPI metadata (`pHYs`).
    Png,
    /// Lossy; honours [`ExportOptions::quality`]. No DPI metadata.
    Jpeg,
    /// Uncompressed; no DPI metadata.
    Bmp,
}

/// How a canvas is serialized.
///
/// `quality` is in `1..=100`. JPEG uses it directly; PNG maps it to a
/// compression level (`>= 90` best, `<= 30` fast, default otherwise).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub dpi: Option<u32>,
    pub quality: u8,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::png()
    }
}

impl ExportOptions {
    /// PNG at quality 100 without DPI metadata.
    pub const fn png() -> Self {
        Self { format: ExportFormat::Png, dpi: None, quality: 100 }
    }

    pub const fn with_format(self, format: ExportFormat) -> Self {
        Self { format, ..self }
    }

    pub const fn with_dpi(self, dpi: u32) -> Self {
        Self { dpi: Some(dpi), ..self }
    }

    pub const fn with_quality(self, quality: u8) -> Self {
        Self { quality, ..self }
    }

    fn png_compression(&self) -> png::Compression {
        match self.quality {
            90.. => png::Compression::Best,
            0..=30 => png::Compression::Fast,
            _ => png::Compression::Default,
        }
    }
}

/// Converts dots-per-inch to pixels-per-meter, rounding to nearest.
#[inline]
pub fn dpi_to_ppm(dpi: u32) -> u32 {
    (dpi as f64 / METERS_PER_INCH).round() as u32
}

/// Converts pixels-per-meter back to dots-per-inch, rounding to nearest.
#[inline]
pub fn ppm_to_dpi(ppm: u32) -> u32 {
    (ppm as f64 * METERS_PER_INCH).round() as u32
}

/// Error returned by [`Canvas::export`](super::Canvas::export).
#[derive(Debug)]
pub enum ExportError {
    /// The destination could not be created, written, or renamed into place.
    Io { path: PathBuf, source: io::Error },
    /// The encoder rejected the image.
    Encode { path: PathBuf, message: String },
}

impl ExportError {
    pub fn path(&self) -> &Path {
        match self {
            ExportError::Io { path, .. } | ExportError::Encode { path, .. } => path,
        }
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io { path, source } => {
                write!(f, "cannot write {}: {source}", path.display())
            }
            ExportError::Encode { path, message } => {
                write!(f, "cannot encode {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io { source, .. } => Some(source),
            ExportError::Encode { .. } => None,
        }
    }
}

/// Sibling path the encoder writes to before the final rename.
fn partial_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".partial");
    path.with_file_name(name)
}

pub(crate) fn write_image(img: &RgbImage, path: &Path, options: &ExportOptions) -> Result<(), ExportError> {
    let tmp = partial_path(path);

    let written = File::create(&tmp)
        .map_err(|source| ExportError::Io { path: path.to_path_buf(), source })
        .and_then(|file| {
            let mut out = BufWriter::new(file);
            encode(img, &mut out, path, options)?;
            let file = out
                .into_inner()
                .map_err(|e| ExportError::Io { path: path.to_path_buf(), source: e.into_error() })?;
            file.sync_all()
                .map_err(|source| ExportError::Io { path: path.to_path_buf(), source })
        })
        .and_then(|()| {
            fs::rename(&tmp, path).map_err(|source| ExportError::Io { path: path.to_path_buf(), source })
        });

    if written.is_err() {
        // Nothing to clean up when the temporary file was never created.
        let _ = fs::remove_file(&tmp);
    }
    written
}

fn encode<W: Write>(img: &RgbImage, out: &mut W, path: &Path, options: &ExportOptions) -> Result<(), ExportError> {
    match options.format {
        ExportFormat::Png => encode_png(img, out, path, options),
        ExportFormat::Jpeg => {
            let quality = options.quality.clamp(1, 100);
            img.write_with_encoder(JpegEncoder::new_with_quality(out, quality))
                .map_err(|e| image_error(path, e))
        }
        ExportFormat::Bmp => img
            .write_with_encoder(BmpEncoder::new(out))
            .map_err(|e| image_error(path, e)),
    }
}

fn encode_png<W: Write>(img: &RgbImage, out: &mut W, path: &Path, options: &ExportOptions) -> Result<(), ExportError> {
    let mut encoder = png::Encoder::new(out, img.width(), img.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(options.png_compression());
    if let Some(dpi) = options.dpi {
        let ppm = dpi_to_ppm(dpi);
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: ppm,
            yppu: ppm,
            unit: png::Unit::Meter,
        }));
    }

    let mut writer = encoder.write_header().map_err(|e| png_error(path, e))?;
    writer.write_image_data(img.as_raw()).map_err(|e| png_error(path, e))?;
    writer.finish().map_err(|e| png_error(path, e))
}

fn png_error(path: &Path, e: png::EncodingError) -> ExportError {
    match e {
        png::EncodingError::IoError(source) => ExportError::Io { path: path.to_path_buf(), source },
        other => ExportError::Encode { path: path.to_path_buf(), message: other.to_string() },
    }
}

fn image_error(path: &Path, e: ImageError) -> ExportError {
    match e {
        ImageError::IoError(source) => ExportError::Io { path: path.to_path_buf(), source },
        other => ExportError::Encode { path: path.to_path_buf(), message: other.to_string() },
    }
}
