//! Test fixtures: small encoded images with known content.

use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Width of [`photo_png`]
pub const PHOTO_WIDTH: u32 = 48;

/// Height of [`photo_png`]
pub const PHOTO_HEIGHT: u32 = 32;

fn encode(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, format).unwrap();
    buf.into_inner()
}

/// Light colour page with a dark rectangle: clear edges, no noise.
pub fn photo() -> RgbImage {
    RgbImage::from_fn(PHOTO_WIDTH, PHOTO_HEIGHT, |x, y| {
        if (12..36).contains(&x) && (8..24).contains(&y) {
            Rgb([40, 30, 90])
        } else {
            Rgb([235, 225, 210])
        }
    })
}

/// [`photo`] encoded as PNG
pub fn photo_png() -> Vec<u8> {
    encode(photo().into(), ImageFormat::Png)
}

/// Uniform gray PNG, which has no edges at all
pub fn flat_png(width: u32, height: u32) -> Vec<u8> {
    encode(
        GrayImage::from_pixel(width, height, Luma([128])).into(),
        ImageFormat::Png,
    )
}

/// Write [`photo`] into `dir` in the format implied by `name`
pub fn write_photo(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    photo().save(&path).unwrap();
    path
}
