//! Built-in layer and gradient tables.
//!
//! Layer 0 is the outermost (largest, lightest, painted first); layer 3 the
//! innermost. Gradients only reference palette slots, so the same tables work
//! with any five colors.

use crate::paint::{ColorKey, ColorRef, GradientDef, GradientStop};
use crate::shape::BaseLayer;

const fn layer(width: f64, height: f64, peak_height: f64, pointiness: f64, blur: f64) -> BaseLayer {
    BaseLayer { width, height, peak_height, pointiness, baseline: 0.0, blur: Some(blur) }
}

pub const BASE_LAYERS: [BaseLayer; 4] = [
    layer(140.0, 90.0, 85.0, 55.0, 7.0),
    layer(140.0, 80.0, 89.0, 55.0, 6.0),
    layer(125.0, 70.0, 75.0, 80.0, 5.0),
    layer(120.0, 50.0, 65.0, 45.0, 3.0),
];

/// Gradient reference per layer index.
pub const SHAPE_GRADIENT_MAP: [&str; 4] = [
    "gpb-gradient-4",
    "gpb-gradient-3",
    "gpb-gradient-2",
    "gpb-gradient-1",
];

fn stop(offset: f64, color: ColorKey, opacity: f64) -> GradientStop {
    GradientStop::new(offset, ColorRef::new(color, opacity))
}

/// The four built-in gradients, all vertical (angle 0).
pub fn base_gradients() -> Vec<GradientDef> {
    use ColorKey::*;

    vec![
        GradientDef::linear("gpb-gradient-1", Some(0.0), vec![stop(70.0, E, 20.0), stop(87.0, E, 100.0)]),
        GradientDef::linear("gpb-gradient-2", Some(0.0), vec![stop(47.0, C, 0.0), stop(70.0, D, 70.0)]),
        GradientDef::linear(
            "gpb-gradient-3",
            Some(0.0),
            vec![stop(30.0, C, 2.0), stop(40.0, C, 30.0), stop(70.0, A, 0.0)],
        ),
        GradientDef::linear(
            "gpb-gradient-4",
            Some(0.0),
            vec![stop(20.0, C, 0.0), stop(50.0, C, 20.0), stop(100.0, B, 40.0)],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mapped_gradient_exists() {
        let gradients = base_gradients();
        for id in SHAPE_GRADIENT_MAP {
            assert!(gradients.iter().any(|g| g.id == id), "missing {id}");
        }
    }

    #[test]
    fn base_layers_are_valid_and_shrink_inward() {
        for (i, l) in BASE_LAYERS.iter().enumerate() {
            assert!(l.with_gradient(SHAPE_GRADIENT_MAP[i]).is_valid());
        }
        assert!(BASE_LAYERS.windows(2).all(|w| w[0].height > w[1].height));
    }
}
