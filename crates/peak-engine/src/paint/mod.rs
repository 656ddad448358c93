//! Paint model: palette slots, gradient definitions, and their resolved form.
//!
//! Scope:
//! - opaque palette colors (never parsed or converted)
//! - declarative gradient definitions referencing palette slots
//! - resolved gradients with absolute geometry in coordinate space
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::{ColorKey, ColorPalette, ColorRef, PaletteError};
pub use gradient::{
    GradientDef, GradientGeometry, GradientKind, GradientStop, LinearAxis, ResolvedGradient,
    ResolvedStop, resolve_gradient, resolve_linear_axis,
};
