//! Stage 1: collapse to a single intensity channel.

use crate::bitmap::{Bitmap, PixelFormat};

/// Rec. 601 luma weights in thousandths: R, G, B.
pub const LUMA_WEIGHTS: [u32; 3] = [299, 587, 114];

/// Luma of one `R, G, B` triple, rounded to nearest.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    ((r as u32 * wr + g as u32 * wg + b as u32 * wb + 500) / 1000) as u8
}

/// Convert any bitmap to single-channel intensity.
///
/// Gray input is returned as an identical copy.
pub fn to_grayscale(input: &Bitmap) -> Bitmap {
    match input.format() {
        PixelFormat::Gray => input.clone(),
        PixelFormat::Rgb => {
            let data = input
                .data()
                .chunks_exact(3)
                .map(|px| luma(px[0], px[1], px[2]))
                .collect();
            Bitmap::gray(input.width(), input.height(), data)
        }
    }
}
