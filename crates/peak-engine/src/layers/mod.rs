//! Layer scaling from master controls, plus the built-in layer tables.

pub mod presets;
mod scaler;

pub use scaler::{MasterControls, scale_layers};

use crate::shape::ShapeParams;

/// Built-in layers scaled by `masters`, with their built-in gradient references.
pub fn preset_layers(masters: MasterControls) -> Vec<ShapeParams> {
    scale_layers(masters, &presets::BASE_LAYERS, &presets::SHAPE_GRADIENT_MAP)
}
