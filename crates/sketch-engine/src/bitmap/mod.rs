//! Raster types shared by every pipeline stage.
//!
//! - [`Bitmap`]: 8-bit gray or RGB samples, the engine's input and output.
//! - [`LineMask`]: binary line/background image between thresholding and
//!   polarity mapping.

mod bitmap;
mod mask;

pub use bitmap::{Bitmap, PixelFormat};
pub use mask::LineMask;
