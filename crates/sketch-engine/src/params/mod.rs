//! Render parameters and their mapping onto stage constants.

mod mapping;
mod options;

pub use mapping::{
    blur_radius, edge_threshold, structuring_radius, MAX_BLUR_RADIUS, MAX_STRUCTURING_RADIUS,
};
pub use options::{
    EdgeOperator, Polarity, SketchParams, LINE_DETAIL_RANGE, LINE_THICKNESS_RANGE,
    NOISE_REDUCTION_RANGE,
};
