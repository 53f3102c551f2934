//! Owned 8-bit raster with a fixed channel layout.
//!
//! [`Bitmap`] is the only image type crossing the engine boundary. Samples
//! are stored row-major, origin top-left, channels interleaved.

use crate::api::SketchError;

/// Channel layout of a [`Bitmap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// One intensity sample per pixel.
    Gray,
    /// Three samples per pixel in `R, G, B` order.
    Rgb,
}

impl PixelFormat {
    /// Number of interleaved samples per pixel.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Gray => 1,
            PixelFormat::Rgb => 3,
        }
    }
}

/// An 8-bit raster image.
///
/// Construction does not check dimensions so that callers holding foreign
/// buffers can hand them to the engine as-is; every engine entry point runs
/// [`Bitmap::validate`] first and reports a [`SketchError::Dimension`]
/// instead of misbehaving.
///
/// # Example
///
/// ```
/// use sketch_engine::{Bitmap, PixelFormat};
///
/// let bitmap = Bitmap::gray(2, 2, vec![0, 255, 255, 0]);
/// assert!(bitmap.validate().is_ok());
/// assert_eq!(bitmap.format(), PixelFormat::Gray);
/// assert_eq!(bitmap.get(1, 0), 255);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    format: PixelFormat,
    data: Vec<u8>,
}

impl Bitmap {
    /// Wrap raw interleaved samples.
    pub fn new(width: usize, height: usize, format: PixelFormat, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            format,
            data,
        }
    }

    /// Wrap single-channel samples.
    #[inline]
    pub fn gray(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self::new(width, height, PixelFormat::Gray, data)
    }

    /// Wrap `R, G, B` interleaved samples.
    #[inline]
    pub fn rgb(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self::new(width, height, PixelFormat::Rgb, data)
    }

    /// A single-channel bitmap where every sample is `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self::gray(width, height, vec![value; width * height])
    }

    /// Check the shape invariants: non-zero width and height, and exactly
    /// `width * height * channels` samples.
    pub fn validate(&self) -> Result<(), SketchError> {
        if self.width == 0 || self.height == 0 {
            return Err(SketchError::Dimension {
                width: self.width,
                height: self.height,
                reason: "width and height must be non-zero".to_string(),
            });
        }
        let expected = self
            .width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(self.format.channels()));
        match expected {
            Some(n) if n == self.data.len() => Ok(()),
            Some(n) => Err(SketchError::Dimension {
                width: self.width,
                height: self.height,
                reason: format!("expected {n} samples, found {}", self.data.len()),
            }),
            None => Err(SketchError::Dimension {
                width: self.width,
                height: self.height,
                reason: "sample count overflows".to_string(),
            }),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Raw interleaved samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the bitmap and return its samples.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// One row of interleaved samples.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let stride = self.width * self.format.channels();
        &self.data[y * stride..(y + 1) * stride]
    }

    /// First-channel sample at (x, y). For gray bitmaps this is the intensity.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[(y * self.width + x) * self.format.channels()]
    }

    /// Sample at (x, y) with coordinates clamped into the image, i.e.
    /// replicated borders.
    ///
    /// # Panics
    ///
    /// Panics on an empty bitmap, where there is no pixel to clamp to.
    #[inline]
    pub fn get_clamped(&self, x: isize, y: isize) -> u8 {
        let cx = x.clamp(0, self.width as isize - 1) as usize;
        let cy = y.clamp(0, self.height as isize - 1) as usize;
        self.get(cx, cy)
    }

    /// Pixel-wise `255 - v` over every sample.
    pub fn inverted(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            format: self.format,
            data: self.data.iter().map(|&v| 255 - v).collect(),
        }
    }
}
