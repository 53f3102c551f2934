//! Binary line mask produced by thresholding and widened by morphology.

/// A binary image: `true` marks a line pixel, `false` background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMask {
    width: usize,
    height: usize,
    lines: Vec<bool>,
}

impl LineMask {
    /// Wrap row-major line flags.
    ///
    /// # Panics
    ///
    /// Panics if `lines.len() != width * height`.
    pub fn new(width: usize, height: usize, lines: Vec<bool>) -> Self {
        assert_eq!(
            lines.len(),
            width * height,
            "mask length ({}) must match width * height ({}x{})",
            lines.len(),
            width,
            height,
        );
        Self {
            width,
            height,
            lines,
        }
    }

    /// An all-background mask.
    pub fn empty(width: usize, height: usize) -> Self {
        Self::new(width, height, vec![false; width * height])
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major line flags.
    #[inline]
    pub fn lines(&self) -> &[bool] {
        &self.lines
    }

    #[inline]
    pub fn is_line(&self, x: usize, y: usize) -> bool {
        self.lines[y * self.width + x]
    }

    /// Number of line pixels.
    pub fn line_count(&self) -> usize {
        self.lines.iter().filter(|&&l| l).count()
    }

    /// Whether every line pixel of `self` is also a line pixel of `other`.
    pub fn is_subset_of(&self, other: &LineMask) -> bool {
        self.width == other.width
            && self.height == other.height
            && self
                .lines
                .iter()
                .zip(&other.lines)
                .all(|(&a, &b)| !a || b)
    }
}
