//! Decode image files into engine bitmaps.
//!
//! Whatever the source encoding, the result is either an 8-bit `Gray`
//! bitmap (sources without colour) or an 8-bit `Rgb` bitmap. Alpha is
//! composited onto white, palettes are expanded, 16-bit samples are
//! reduced to 8 bits.

use image::DynamicImage;
use sketch_engine::Bitmap;
use std::path::Path;

use crate::error::FileError;

/// Load and decode an image file.
pub fn load(path: &Path) -> Result<Bitmap, FileError> {
    // Sniff the content so a mislabelled extension still decodes.
    let image = image::ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(path, e))?
        .decode()
        .map_err(|e| decode_error(path, e))?;
    let bitmap = from_dynamic(image);
    tracing::info!(
        path = %path.display(),
        width = bitmap.width(),
        height = bitmap.height(),
        format = ?bitmap.format(),
        "Loaded image"
    );
    Ok(bitmap)
}

/// Decode an image held in memory. The format is sniffed from the bytes.
pub fn load_from_memory(bytes: &[u8]) -> Result<Bitmap, FileError> {
    if bytes.is_empty() {
        return Err(FileError::Decode("empty image data".to_string()));
    }
    let image = image::load_from_memory(bytes).map_err(|e| FileError::Decode(e.to_string()))?;
    Ok(from_dynamic(image))
}

fn decode_error(path: &Path, e: impl std::fmt::Display) -> FileError {
    FileError::Decode(format!("{}: {e}", path.display()))
}

/// Convert a decoded image into a canonical bitmap.
pub(crate) fn from_dynamic(image: DynamicImage) -> Bitmap {
    let color = image.color();
    let (width, height) = (image.width() as usize, image.height() as usize);

    match (color.has_color(), color.has_alpha()) {
        (false, false) => Bitmap::gray(width, height, image.into_luma8().into_raw()),
        (false, true) => {
            let data = image
                .into_luma_alpha8()
                .into_raw()
                .chunks_exact(2)
                .map(|px| over_white(px[0], px[1]))
                .collect();
            Bitmap::gray(width, height, data)
        }
        (true, false) => Bitmap::rgb(width, height, image.into_rgb8().into_raw()),
        (true, true) => {
            let rgba = image.into_rgba8().into_raw();
            let mut data = Vec::with_capacity(width * height * 3);
            for px in rgba.chunks_exact(4) {
                let a = px[3];
                data.extend_from_slice(&[
                    over_white(px[0], a),
                    over_white(px[1], a),
                    over_white(px[2], a),
                ]);
            }
            Bitmap::rgb(width, height, data)
        }
    }
}

/// Alpha-composite one sample against a white background.
#[inline]
fn over_white(value: u8, alpha: u8) -> u8 {
    match alpha {
        255 => value,
        0 => 255,
        a => {
            let a = a as u16;
            ((value as u16 * a + 255 * (255 - a)) / 255) as u8
        }
    }
}
