pub mod session;

pub use session::{ImageInfo, SessionSnapshot, SketchSession};
