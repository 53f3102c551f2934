//! Pure mappings from UI parameters to algorithm constants.
//!
//! Stages never read [`SketchParams`](super::SketchParams) directly; they take
//! the constants produced here. A UI may change its slider ranges without
//! touching the stages, and each mapping is monotone and testable alone.

/// Largest structuring-element radius the thickness stage will use.
///
/// A 9x9 square. Wider elements start fusing neighbouring strokes of a
/// typical photo into solid blobs.
pub const MAX_STRUCTURING_RADIUS: usize = 4;

/// Largest blur radius (number of binomial passes) the denoise stage will use.
pub const MAX_BLUR_RADIUS: usize = 10;

/// Blur radius for a `noise_reduction` value: how many 3x3 binomial passes
/// the denoise stage runs.
///
/// `floor(noise_reduction)`, so anything below 1.0 is the identity.
/// Negative or NaN input maps to 0.
#[inline]
pub fn blur_radius(noise_reduction: f32) -> usize {
    if noise_reduction.is_nan() || noise_reduction < 1.0 {
        return 0;
    }
    (noise_reduction.floor() as usize).min(MAX_BLUR_RADIUS)
}

/// Minimum edge response that counts as a line for a `line_detail` value.
///
/// Linear from 255 at detail 0 down to 1 at detail 100. Never 0, so a
/// featureless region (response 0) never produces a line.
#[inline]
pub fn edge_threshold(line_detail: f32) -> u8 {
    let detail = if line_detail.is_nan() {
        0.0
    } else {
        line_detail.clamp(0.0, 100.0)
    };
    let drop = (detail / 100.0 * 254.0).round() as u8;
    255 - drop
}

/// Square structuring-element radius for a `line_thickness` value.
///
/// `ceil(line_thickness / 2)` clamped to [`MAX_STRUCTURING_RADIUS`];
/// thickness 0 (or less) is the identity.
#[inline]
pub fn structuring_radius(line_thickness: i32) -> usize {
    if line_thickness <= 0 {
        return 0;
    }
    (line_thickness as usize).div_ceil(2).min(MAX_STRUCTURING_RADIUS)
}
