//! Encode bitmaps for display and for saving to disk.

use image::{imageops::FilterType, DynamicImage, GrayImage, ImageFormat, RgbImage};
use sketch_engine::{Bitmap, PixelFormat};
use std::io::Cursor;
use std::path::Path;

use crate::error::FileError;

/// File formats accepted on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    Png,
    Jpeg,
    Bmp,
}

impl SaveFormat {
    /// Resolve a format name or file extension, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, FileError> {
        match name.to_ascii_lowercase().as_str() {
            "png" => Ok(SaveFormat::Png),
            "jpg" | "jpeg" => Ok(SaveFormat::Jpeg),
            "bmp" => Ok(SaveFormat::Bmp),
            other => Err(FileError::Encode(format!("unsupported format `{other}`"))),
        }
    }

    /// Resolve the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, FileError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| {
                FileError::Encode(format!("{} has no file extension", path.display()))
            })?;
        Self::from_name(ext)
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            SaveFormat::Png => "png",
            SaveFormat::Jpeg => "jpg",
            SaveFormat::Bmp => "bmp",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            SaveFormat::Png => ImageFormat::Png,
            SaveFormat::Jpeg => ImageFormat::Jpeg,
            SaveFormat::Bmp => ImageFormat::Bmp,
        }
    }
}

/// Encode a bitmap in the given format.
pub fn encode(bitmap: &Bitmap, format: SaveFormat) -> Result<Vec<u8>, FileError> {
    if format == SaveFormat::Png {
        return encode_png(bitmap);
    }
    let image = to_dynamic(bitmap)?;
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, format.image_format())
        .map_err(|e| FileError::Encode(e.to_string()))?;
    Ok(buf.into_inner())
}

/// Encode and write a bitmap, creating missing parent directories.
///
/// Nothing touches the filesystem until encoding has succeeded.
pub fn save(bitmap: &Bitmap, path: &Path, format: SaveFormat) -> Result<(), FileError> {
    let bytes = encode(bitmap, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| FileError::Write(format!("{}: {e}", parent.display())))?;
    }
    std::fs::write(path, &bytes)
        .map_err(|e| FileError::Write(format!("{}: {e}", path.display())))?;

    tracing::info!(
        path = %path.display(),
        format = ?format,
        bytes = bytes.len(),
        "Saved sketch"
    );
    Ok(())
}

/// Fast 8-bit PNG encoding, used for every preview response.
pub fn encode_png(bitmap: &Bitmap) -> Result<Vec<u8>, FileError> {
    bitmap
        .validate()
        .map_err(|e| FileError::Encode(e.to_string()))?;
    let (width, height) = dimensions_u32(bitmap)?;
    let color_type = match bitmap.format() {
        PixelFormat::Gray => png::ColorType::Grayscale,
        PixelFormat::Rgb => png::ColorType::Rgb,
    };

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| FileError::Encode(e.to_string()))?;
        writer
            .write_image_data(bitmap.data())
            .map_err(|e| FileError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Downscale to fit inside `max_width` x `max_height`, keeping the aspect
/// ratio. Bitmaps that already fit are returned unchanged; nothing is ever
/// upscaled, and no side shrinks below one pixel.
pub fn fit_within(bitmap: &Bitmap, max_width: u32, max_height: u32) -> Bitmap {
    let (w, h) = (bitmap.width() as f64, bitmap.height() as f64);
    let (max_w, max_h) = (max_width.max(1) as f64, max_height.max(1) as f64);
    if w <= max_w && h <= max_h {
        return bitmap.clone();
    }

    let scale = (max_w / w).min(max_h / h);
    let new_w = ((w * scale).round() as u32).clamp(1, max_width.max(1));
    let new_h = ((h * scale).round() as u32).clamp(1, max_height.max(1));

    let (width, height) = (bitmap.width() as u32, bitmap.height() as u32);
    let data = bitmap.data().to_vec();
    match bitmap.format() {
        PixelFormat::Gray => match GrayImage::from_raw(width, height, data) {
            Some(img) => {
                let out = image::imageops::resize(&img, new_w, new_h, FilterType::Triangle);
                Bitmap::gray(new_w as usize, new_h as usize, out.into_raw())
            }
            None => bitmap.clone(),
        },
        PixelFormat::Rgb => match RgbImage::from_raw(width, height, data) {
            Some(img) => {
                let out = image::imageops::resize(&img, new_w, new_h, FilterType::Triangle);
                Bitmap::rgb(new_w as usize, new_h as usize, out.into_raw())
            }
            None => bitmap.clone(),
        },
    }
}

fn dimensions_u32(bitmap: &Bitmap) -> Result<(u32, u32), FileError> {
    let width = u32::try_from(bitmap.width())
        .map_err(|_| FileError::Encode(format!("width {} too large", bitmap.width())))?;
    let height = u32::try_from(bitmap.height())
        .map_err(|_| FileError::Encode(format!("height {} too large", bitmap.height())))?;
    Ok((width, height))
}

fn to_dynamic(bitmap: &Bitmap) -> Result<DynamicImage, FileError> {
    bitmap
        .validate()
        .map_err(|e| FileError::Encode(e.to_string()))?;
    let (width, height) = dimensions_u32(bitmap)?;
    let data = bitmap.data().to_vec();
    let image = match bitmap.format() {
        PixelFormat::Gray => GrayImage::from_raw(width, height, data).map(DynamicImage::ImageLuma8),
        PixelFormat::Rgb => RgbImage::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
    };
    image.ok_or_else(|| FileError::Encode("sample buffer does not match dimensions".to_string()))
}
