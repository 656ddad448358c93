//! Peak shape parameters and outline synthesis.

mod params;
mod path;

pub use params::{BaseLayer, ShapeParams};
pub use path::{PathCmd, PeakPath, synthesize_path};
