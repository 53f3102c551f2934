//! The six pipeline stages, in execution order.
//!
//! Each stage is a free function over owned rasters and takes algorithm
//! constants, not UI parameters. [`render`](crate::render) composes them;
//! callers who need a different composition can call them directly.
//!
//! Stages index sample buffers directly. Inputs must satisfy
//! [`Bitmap::validate`](crate::Bitmap::validate) apart from the non-zero
//! size rule: an empty raster yields an empty result.

mod denoise;
mod edges;
mod grayscale;
mod morphology;
mod polarity;
mod threshold;

pub use denoise::binomial_blur;
pub use edges::{
    extract_edges, local_darkness, morphological_gradient, ADAPTIVE_BLOCK_RADIUS,
};
pub use grayscale::{luma, to_grayscale, LUMA_WEIGHTS};
pub use morphology::dilate;
pub use polarity::{apply_polarity, ink_and_paper};
pub use threshold::binarize;
