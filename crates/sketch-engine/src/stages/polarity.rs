//! Stage 6: paint the mask as ink on paper.

use crate::bitmap::{Bitmap, LineMask};
use crate::params::Polarity;

/// `(line, background)` intensities for a polarity.
#[inline]
pub fn ink_and_paper(polarity: Polarity) -> (u8, u8) {
    match polarity {
        Polarity::DarkOnLight => (0, 255),
        Polarity::LightOnDark => (255, 0),
    }
}

/// Map the final mask to a gray bitmap.
pub fn apply_polarity(mask: &LineMask, polarity: Polarity) -> Bitmap {
    let (ink, paper) = ink_and_paper(polarity);
    let data = mask
        .lines()
        .iter()
        .map(|&line| if line { ink } else { paper })
        .collect();
    Bitmap::gray(mask.width(), mask.height(), data)
}
