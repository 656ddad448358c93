//! SVG output for peak-engine draw lists.
//!
//! - [`SvgSurface`] implements [`RenderSurface`](peak_engine::scene::RenderSurface)
//!   and produces standalone SVG markup
//! - [`rasterize`] turns that markup into RGBA pixels with resvg

pub mod document;
pub mod error;
pub mod rasterize;

pub use document::{SvgSurface, render_svg};
pub use error::SvgError;
pub use rasterize::{RasterImage, rasterize};
