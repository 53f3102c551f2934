//! Image file I/O around the sketch engine.

pub mod exporter;
pub mod loader;

pub use exporter::{encode, encode_png, fit_within, save, SaveFormat};
pub use loader::{load, load_from_memory};
