//! Stage 5: stroke thickness via binary dilation.
//!
//! A square structuring element is separable, so dilation runs as a
//! horizontal pass followed by a vertical pass. Pixels outside the image
//! count as background.

use crate::bitmap::LineMask;

/// Dilate `mask` with a `(2r+1) x (2r+1)` square. `radius == 0` returns an
/// identical copy. The result is always a superset of the input.
pub fn dilate(mask: &LineMask, radius: usize) -> LineMask {
    if radius == 0 {
        return mask.clone();
    }
    let (w, h) = (mask.width(), mask.height());
    let src = mask.lines();

    let mut horizontal = vec![false; w * h];
    for y in 0..h {
        let row = &src[y * w..(y + 1) * w];
        for x in 0..w {
            let lo = x.saturating_sub(radius);
            let hi = (x + radius).min(w - 1);
            horizontal[y * w + x] = row[lo..=hi].iter().any(|&l| l);
        }
    }

    let mut out = vec![false; w * h];
    for x in 0..w {
        for y in 0..h {
            let lo = y.saturating_sub(radius);
            let hi = (y + radius).min(h - 1);
            out[y * w + x] = (lo..=hi).any(|sy| horizontal[sy * w + x]);
        }
    }

    LineMask::new(w, h, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_dot(size: usize, x: usize, y: usize) -> LineMask {
        let mut lines = vec![false; size * size];
        lines[y * size + x] = true;
        LineMask::new(size, size, lines)
    }

    #[test]
    fn test_radius_zero_is_identity() {
        let mask = single_dot(5, 2, 2);
        assert_eq!(dilate(&mask, 0), mask);
    }

    #[test]
    fn test_dot_grows_to_square() {
        let out = dilate(&single_dot(7, 3, 3), 2);
        assert_eq!(out.line_count(), 25);
        for y in 0..7 {
            for x in 0..7 {
                let inside = (1..=5).contains(&x) && (1..=5).contains(&y);
                assert_eq!(out.is_line(x, y), inside, "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_corner_dot_is_clipped() {
        let out = dilate(&single_dot(5, 0, 0), 1);
        assert_eq!(out.line_count(), 4);
        assert!(out.is_line(1, 1));
        assert!(!out.is_line(2, 0));
    }

    #[test]
    fn test_empty_stays_empty() {
        let out = dilate(&LineMask::empty(6, 3), 3);
        assert_eq!(out.line_count(), 0);
    }

    #[test]
    fn test_dilation_is_superset() {
        let mask = LineMask::new(
            4,
            3,
            vec![
                true, false, false, false, //
                false, false, true, false, //
                false, false, false, false,
            ],
        );
        let out = dilate(&mask, 1);
        assert!(mask.is_subset_of(&out));
        assert!(out.line_count() > mask.line_count());
    }
}
