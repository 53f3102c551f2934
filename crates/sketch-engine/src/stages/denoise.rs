//! Stage 2: noise suppression by cascaded binomial blur.
//!
//! Each pass convolves with the separable 3x3 kernel `[1 2 1]^T [1 2 1] / 16`
//! (replicated borders) and `radius` passes approximate a Gaussian whose
//! support reaches `radius` pixels. Level `r + 1` is one more pass over the
//! output of level `r`, so raising the radius only ever removes roughness.
//!
//! Every pixel moves toward its smoothed value by the truncated integer
//! step. Rounding to nearest can push a near-flat pixel past its neighbour
//! and make the result rougher than its input; truncation never overshoots.

use crate::bitmap::{Bitmap, PixelFormat};

/// Blur with `radius` cascaded binomial passes. `radius == 0` returns an
/// identical copy, as does an empty raster.
pub fn binomial_blur(gray: &Bitmap, radius: usize) -> Bitmap {
    debug_assert_eq!(gray.format(), PixelFormat::Gray);
    let (w, h) = (gray.width(), gray.height());
    if radius == 0 || w == 0 || h == 0 {
        return gray.clone();
    }

    let mut current = gray.data().to_vec();
    let mut rows = vec![0u16; w * h];
    for _ in 0..radius {
        binomial_pass(&mut current, &mut rows, w, h);
    }
    Bitmap::gray(w, h, current)
}

/// One 3x3 pass in place. `rows` is scratch space of the same length.
fn binomial_pass(samples: &mut [u8], rows: &mut [u16], w: usize, h: usize) {
    for y in 0..h {
        let row = &samples[y * w..(y + 1) * w];
        for x in 0..w {
            let left = row[x.saturating_sub(1)] as u16;
            let right = row[(x + 1).min(w - 1)] as u16;
            rows[y * w + x] = left + 2 * row[x] as u16 + right;
        }
    }

    for y in 0..h {
        let up = y.saturating_sub(1) * w;
        let down = (y + 1).min(h - 1) * w;
        for x in 0..w {
            let sum = rows[up + x] as i32 + 2 * rows[y * w + x] as i32 + rows[down + x] as i32;
            let previous = samples[y * w + x] as i32;
            // Truncating division rounds the step toward the previous value.
            let step = (sum - 16 * previous) / 16;
            samples[y * w + x] = (previous + step) as u8;
        }
    }
}
