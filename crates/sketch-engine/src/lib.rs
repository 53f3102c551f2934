#![allow(clippy::module_inception, clippy::needless_range_loop)]

//! sketch-engine: turn photographs into line drawings
//!
//! A single pure function, [`render`], takes an 8-bit gray or RGB
//! [`Bitmap`] and a set of [`SketchParams`] and returns a gray bitmap of the
//! same size containing only two intensities: ink and paper.
//!
//! # Quick Start
//!
//! ```
//! use sketch_engine::{render, Bitmap, Polarity, SketchParams};
//!
//! let photo = Bitmap::filled(4, 4, 90);
//! let params = SketchParams::new()
//!     .noise_reduction(1.0)
//!     .line_detail(75.0)
//!     .line_thickness(2)
//!     .polarity(Polarity::LightOnDark);
//!
//! let sketch = render(&photo, &params).unwrap();
//! assert_eq!(sketch.width(), 4);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! Bitmap ─▶ grayscale ─▶ binomial blur ─▶ edge strength ─▶ threshold
//!                                                             │
//!            Bitmap ◀── polarity ◀── dilation ◀── LineMask ◀───┘
//! ```
//!
//! | Stage | Function | Controlled by |
//! |-------|----------|---------------|
//! | 1 | [`to_grayscale`] | nothing (Rec. 601 luma) |
//! | 2 | [`binomial_blur`] | `noise_reduction` via [`blur_radius`] |
//! | 3 | [`extract_edges`] | `edge_operator` |
//! | 4 | [`binarize`] | `line_detail` via [`edge_threshold`] |
//! | 5 | [`dilate`] | `line_thickness` via [`structuring_radius`] |
//! | 6 | [`apply_polarity`] | `polarity` |
//!
//! Every stage allocates a fresh raster, so [`render_stages`] can hand back
//! all intermediates without copying.
//!
//! # Parameter Semantics
//!
//! Each slider moves its output in one direction only:
//!
//! - More `noise_reduction` never makes the smoothed image rougher.
//! - More `line_detail` never removes a line pixel.
//! - More `line_thickness` never removes an ink pixel.
//!
//! Out-of-range parameters are rejected with
//! [`SketchError::InvalidParameter`], never clamped.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`SketchParams`], [`Polarity`]
//!   and [`EdgeOperator`].

pub mod api;
pub mod bitmap;
pub mod params;
pub mod stages;


pub use api::{render, render_stages, SketchError, SketchStages};
pub use bitmap::{Bitmap, LineMask, PixelFormat};
pub use params::{
    blur_radius, edge_threshold, structuring_radius, EdgeOperator, Polarity, SketchParams,
    LINE_DETAIL_RANGE, LINE_THICKNESS_RANGE, NOISE_REDUCTION_RANGE,
};
pub use stages::{apply_polarity, binarize, binomial_blur, dilate, extract_edges, to_grayscale};
