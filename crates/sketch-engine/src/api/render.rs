//! Render entry points composing the six stages.

use std::time::Instant;

use crate::api::SketchError;
use crate::bitmap::{Bitmap, LineMask};
use crate::params::{blur_radius, edge_threshold, structuring_radius, SketchParams};
use crate::stages::{apply_polarity, binarize, binomial_blur, dilate, extract_edges, to_grayscale};

/// Every intermediate of one render, in stage order.
///
/// Returned by [`render_stages`] for diagnostics and for checking stage
/// properties (smoothness after denoise, mask growth under dilation).
#[derive(Debug, Clone)]
pub struct SketchStages {
    /// Stage 1 output.
    pub grayscale: Bitmap,
    /// Stage 2 output.
    pub smoothed: Bitmap,
    /// Stage 3 output.
    pub edges: Bitmap,
    /// Stage 4 output.
    pub mask: LineMask,
    /// Stage 5 output.
    pub thickened: LineMask,
    /// Stage 6 output, identical to what [`render`] returns.
    pub output: Bitmap,
}

/// Turn a photograph into a line drawing.
///
/// Pure: the same `input` and `params` always give the same bytes, and
/// neither argument is modified. Fails with [`SketchError::Dimension`] for a
/// malformed bitmap and [`SketchError::InvalidParameter`] for out-of-range
/// parameters, checked in that order.
///
/// # Example
///
/// ```
/// use sketch_engine::{render, Bitmap, SketchParams};
///
/// let photo = Bitmap::filled(8, 8, 180);
/// let sketch = render(&photo, &SketchParams::default()).unwrap();
///
/// // Featureless input draws nothing: all paper.
/// assert!(sketch.data().iter().all(|&v| v == 255));
/// ```
pub fn render(input: &Bitmap, params: &SketchParams) -> Result<Bitmap, SketchError> {
    render_stages(input, params).map(|stages| stages.output)
}

/// Like [`render`], but keep every intermediate.
pub fn render_stages(input: &Bitmap, params: &SketchParams) -> Result<SketchStages, SketchError> {
    input.validate()?;
    params.validate()?;

    let started = Instant::now();
    let radius = blur_radius(params.noise_reduction);
    let threshold = edge_threshold(params.line_detail);
    let element = structuring_radius(params.line_thickness);

    let grayscale = to_grayscale(input);
    let smoothed = binomial_blur(&grayscale, radius);
    let edges = extract_edges(&smoothed, params.edge_operator);
    let mask = binarize(&edges, threshold);
    let thickened = dilate(&mask, element);
    let output = apply_polarity(&thickened, params.polarity);

    tracing::debug!(
        width = input.width(),
        height = input.height(),
        blur_radius = radius,
        threshold,
        structuring_radius = element,
        operator = ?params.edge_operator,
        lines = thickened.line_count(),
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "Rendered sketch"
    );

    Ok(SketchStages {
        grayscale,
        smoothed,
        edges,
        mask,
        thickened,
        output,
    })
}
