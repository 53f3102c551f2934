//! Stage 3: edge-strength extraction.
//!
//! Output is a gray [`Bitmap`] where larger values mean stronger evidence of
//! a line. It is not binary yet; see [`threshold`](super::threshold).

use crate::bitmap::{Bitmap, PixelFormat};
use crate::params::EdgeOperator;

/// Box radius of [`EdgeOperator::AdaptiveMean`] (a 9x9 block).
pub const ADAPTIVE_BLOCK_RADIUS: usize = 4;

/// Compute the edge map of `gray` with the chosen operator.
pub fn extract_edges(gray: &Bitmap, operator: EdgeOperator) -> Bitmap {
    debug_assert_eq!(gray.format(), PixelFormat::Gray);
    match operator {
        EdgeOperator::Gradient => morphological_gradient(gray),
        EdgeOperator::AdaptiveMean => local_darkness(gray, ADAPTIVE_BLOCK_RADIUS),
    }
}

/// `max - min` over the pixel and its four direct neighbours.
///
/// Zero on any flat region; equal to the step height on both sides of an
/// abrupt step.
pub fn morphological_gradient(gray: &Bitmap) -> Bitmap {
    const CROSS: [(isize, isize); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

    let (w, h) = (gray.width(), gray.height());
    let mut out = Vec::with_capacity(w * h);
    for y in 0..h as isize {
        for x in 0..w as isize {
            let (mut lo, mut hi) = (u8::MAX, u8::MIN);
            for (dx, dy) in CROSS {
                let v = gray.get_clamped(x + dx, y + dy);
                lo = lo.min(v);
                hi = hi.max(v);
            }
            out.push(hi - lo);
        }
    }
    Bitmap::gray(w, h, out)
}

/// How much darker each pixel is than the mean of its `(2r+1)^2` block,
/// floored at zero.
pub fn local_darkness(gray: &Bitmap, radius: usize) -> Bitmap {
    let mean = box_mean(gray, radius);
    let data = gray
        .data()
        .iter()
        .zip(mean.data())
        .map(|(&v, &m)| m.saturating_sub(v))
        .collect();
    Bitmap::gray(gray.width(), gray.height(), data)
}

/// Rounded box mean with replicated borders, computed as two 1-D passes.
fn box_mean(gray: &Bitmap, radius: usize) -> Bitmap {
    let (w, h) = (gray.width(), gray.height());
    let r = radius as isize;
    let area = ((2 * radius + 1) * (2 * radius + 1)) as u32;

    let mut row_sums = vec![0u32; w * h];
    for y in 0..h {
        for x in 0..w as isize {
            let mut sum = 0u32;
            for dx in -r..=r {
                sum += gray.get_clamped(x + dx, y as isize) as u32;
            }
            row_sums[y * w + x as usize] = sum;
        }
    }

    let mut out = Vec::with_capacity(w * h);
    for y in 0..h as isize {
        for x in 0..w {
            let mut sum = 0u32;
            for dy in -r..=r {
                let sy = (y + dy).clamp(0, h as isize - 1) as usize;
                sum += row_sums[sy * w + x];
            }
            out.push(((sum + area / 2) / area) as u8);
        }
    }
    Bitmap::gray(w, h, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_flat_is_zero() {
        let flat = Bitmap::filled(5, 4, 137);
        let edges = morphological_gradient(&flat);
        assert!(edges.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_gradient_vertical_step() {
        // 0 0 | 255 255 on every row
        let row = [0u8, 0, 255, 255];
        let data: Vec<u8> = row.iter().copied().cycle().take(16).collect();
        let edges = morphological_gradient(&Bitmap::gray(4, 4, data));
        for y in 0..4 {
            assert_eq!(edges.row(y), &[0, 255, 255, 0], "row {y}");
        }
    }

    #[test]
    fn test_gradient_partial_step() {
        let edges = morphological_gradient(&Bitmap::gray(3, 1, vec![100, 100, 140]));
        assert_eq!(edges.data(), &[0, 40, 40]);
    }

    #[test]
    fn test_darkness_flat_is_zero() {
        let flat = Bitmap::filled(6, 6, 90);
        let edges = extract_edges(&flat, EdgeOperator::AdaptiveMean);
        assert!(edges.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_darkness_marks_dark_stroke_only() {
        // Single dark column on a light page.
        let mut data = vec![240u8; 9 * 9];
        for y in 0..9 {
            data[y * 9 + 4] = 40;
        }
        let edges = local_darkness(&Bitmap::gray(9, 9, data), 1);
        for y in 0..9 {
            assert!(edges.get(4, y) > 100, "stroke pixel at row {y}");
            assert_eq!(edges.get(0, y), 0, "far background at row {y}");
            // Light pixels beside the stroke are brighter than their mean.
            assert_eq!(edges.get(3, y), 0);
            assert_eq!(edges.get(5, y), 0);
        }
    }

    #[test]
    fn test_box_mean_radius_one() {
        let mean = box_mean(&Bitmap::gray(3, 1, vec![0, 90, 180]), 1);
        // Replicated borders: [0,0,90]x3, [0,90,180]x3, [90,180,180]x3.
        assert_eq!(mean.data(), &[30, 90, 150]);
    }
}
