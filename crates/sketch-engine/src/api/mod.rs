//! Public API for the sketch-engine crate.
//!
//! This module provides the render entry points ([`render`],
//! [`render_stages`]) and the [`SketchError`] error type.

mod error;
mod render;

pub use error::SketchError;
pub use render::{render, render_stages, SketchStages};
