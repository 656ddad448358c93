//! Peak engine crate.
//!
//! Turns a handful of numeric controls into layered, blurred, gradient-filled
//! arch ("peak") geometry inside a normalized coordinate space.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Vec2`, `CoordSpace` |
//! | [`paint`] | palette, gradient definitions, linear axis resolution |
//! | [`shape`] | `ShapeParams`, outline synthesis |
//! | [`layers`] | master-control scaling, built-in tables |
//! | [`scene`] | `DrawList`, `RenderSurface` |
//! | [`compose`] | `Composer` |
//!
//! # Quick start
//!
//! ```rust
//! use peak_engine::compose::Composer;
//! use peak_engine::layers::MasterControls;
//! use peak_engine::paint::ColorPalette;
//!
//! let palette = ColorPalette::from(["#0b1d3a", "#1f4e79", "#3a7bd5", "#8ec5fc", "#e0f2ff"]);
//! let list = Composer::new()
//!     .compose_preset(&palette, MasterControls::new(80.0, 60.0))
//!     .unwrap();
//! assert_eq!(list.layers().len(), 4);
//! ```

pub mod compose;
pub mod coords;
pub mod layers;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod shape;
