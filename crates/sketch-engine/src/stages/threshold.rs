//! Stage 4: binarize the edge map.

use crate::bitmap::{Bitmap, LineMask};

/// Mark every pixel whose edge response is at least `threshold` as a line.
///
/// With `threshold >= 1` (as [`edge_threshold`](crate::params::edge_threshold)
/// guarantees) a zero response is always background.
pub fn binarize(edges: &Bitmap, threshold: u8) -> LineMask {
    let lines = edges.data().iter().map(|&v| v >= threshold).collect();
    LineMask::new(edges.width(), edges.height(), lines)
}
