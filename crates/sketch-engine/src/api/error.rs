//! Error type for the sketch-engine public API.
//!
//! Every failure is a precondition violation by the caller. Nothing here is
//! transient, so nothing is worth retrying.

use thiserror::Error;

/// Error returned by [`render`](crate::render) and friends.
///
/// # Example
///
/// ```
/// use sketch_engine::{render, Bitmap, SketchError, SketchParams};
///
/// let empty = Bitmap::gray(0, 0, Vec::new());
/// let err = render(&empty, &SketchParams::default()).unwrap_err();
/// assert!(matches!(err, SketchError::Dimension { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SketchError {
    /// The input bitmap violates its shape invariants.
    #[error("invalid bitmap dimensions {width}x{height}: {reason}")]
    Dimension {
        width: usize,
        height: usize,
        reason: String,
    },

    /// A parameter lies outside its declared bounds (or is NaN).
    #[error("parameter `{name}` out of range: {value} not in [{min}, {max}]")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
