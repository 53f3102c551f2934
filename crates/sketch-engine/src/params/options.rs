//! The parameter vector driving one render.
//!
//! [`SketchParams`] is plain data: the UI layer owns and mutates it, the
//! engine only reads it. Bounds are public constants so a UI can size its
//! sliders from them.

use std::ops::RangeInclusive;

use crate::api::SketchError;

/// Accepted range of [`SketchParams::noise_reduction`].
pub const NOISE_REDUCTION_RANGE: RangeInclusive<f32> = 0.0..=10.0;

/// Accepted range of [`SketchParams::line_detail`].
pub const LINE_DETAIL_RANGE: RangeInclusive<f32> = 0.0..=100.0;

/// Accepted range of [`SketchParams::line_thickness`].
pub const LINE_THICKNESS_RANGE: RangeInclusive<i32> = 0..=10;

/// Which mask value is drawn as ink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Polarity {
    /// Black lines (0) on white paper (255).
    #[default]
    DarkOnLight,
    /// White lines (255) on a black ground (0).
    LightOnDark,
}

/// Operator used to turn intensities into an edge-strength map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EdgeOperator {
    /// Morphological gradient over the 4-connected cross. Responds to every
    /// intensity step regardless of direction or sign.
    #[default]
    Gradient,
    /// Local darkness against a 9x9 box mean. Responds to dark strokes and
    /// shadows the way a mean-C adaptive threshold does.
    AdaptiveMean,
}

/// Parameter vector for [`render`](crate::render).
///
/// # Defaults
///
/// - noise_reduction: 2.0 (two blur passes)
/// - line_detail: 60.0
/// - line_thickness: 0 (no dilation)
/// - polarity: [`Polarity::DarkOnLight`]
/// - edge_operator: [`EdgeOperator::Gradient`]
///
/// # Example
///
/// ```
/// use sketch_engine::{Polarity, SketchParams};
///
/// let params = SketchParams::new()
///     .noise_reduction(0.0)
///     .line_detail(100.0)
///     .line_thickness(2)
///     .polarity(Polarity::LightOnDark);
/// assert!(params.validate().is_ok());
///
/// let bad = SketchParams::new().line_thickness(-1);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SketchParams {
    /// Blur strength; below 1 disables smoothing.
    pub noise_reduction: f32,

    /// Edge sensitivity; higher keeps fainter edges.
    pub line_detail: f32,

    /// Stroke widening; 0 keeps the detected lines as they are.
    pub line_thickness: i32,

    /// Ink/paper assignment of the final mask.
    pub polarity: Polarity,

    /// Edge detector used before binarization.
    pub edge_operator: EdgeOperator,
}

impl Default for SketchParams {
    fn default() -> Self {
        Self {
            noise_reduction: 2.0,
            line_detail: 60.0,
            line_thickness: 0,
            polarity: Polarity::DarkOnLight,
            edge_operator: EdgeOperator::Gradient,
        }
    }
}

impl SketchParams {
    /// Same as `SketchParams::default()`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn noise_reduction(mut self, value: f32) -> Self {
        self.noise_reduction = value;
        self
    }

    #[inline]
    pub fn line_detail(mut self, value: f32) -> Self {
        self.line_detail = value;
        self
    }

    #[inline]
    pub fn line_thickness(mut self, value: i32) -> Self {
        self.line_thickness = value;
        self
    }

    #[inline]
    pub fn polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    #[inline]
    pub fn edge_operator(mut self, operator: EdgeOperator) -> Self {
        self.edge_operator = operator;
        self
    }

    /// Check every parameter against its bounds.
    ///
    /// NaN is rejected: `RangeInclusive::contains` is false for it.
    pub fn validate(&self) -> Result<(), SketchError> {
        check_f32("noise_reduction", self.noise_reduction, &NOISE_REDUCTION_RANGE)?;
        check_f32("line_detail", self.line_detail, &LINE_DETAIL_RANGE)?;
        if !LINE_THICKNESS_RANGE.contains(&self.line_thickness) {
            return Err(SketchError::InvalidParameter {
                name: "line_thickness",
                value: self.line_thickness as f64,
                min: *LINE_THICKNESS_RANGE.start() as f64,
                max: *LINE_THICKNESS_RANGE.end() as f64,
            });
        }
        Ok(())
    }
}

fn check_f32(
    name: &'static str,
    value: f32,
    range: &RangeInclusive<f32>,
) -> Result<(), SketchError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(SketchError::InvalidParameter {
            name,
            value: value as f64,
            min: *range.start() as f64,
            max: *range.end() as f64,
        })
    }
}
