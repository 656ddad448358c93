use crate::shape::{BaseLayer, ShapeParams};

/// The two user-facing controls that scale every layer at once.
///
/// Both are nominally `0`–`100`. `None` means "use the default", which is
/// applied at scaling time so one definition can be reused with different
/// masters.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct MasterControls {
    pub peak_height: Option<f64>,
    pub pointiness: Option<f64>,
}

impl MasterControls {
    pub const DEFAULT_PEAK_HEIGHT: f64 = 100.0;
    /// Neutral pointiness: reproduces the base tables exactly.
    pub const DEFAULT_POINTINESS: f64 = 50.0;

    #[inline]
    pub const fn new(peak_height: f64, pointiness: f64) -> Self {
        Self { peak_height: Some(peak_height), pointiness: Some(pointiness) }
    }

    pub fn peak_height(&self) -> f64 {
        effective(self.peak_height, Self::DEFAULT_PEAK_HEIGHT, "peak height")
    }

    pub fn pointiness(&self) -> f64 {
        effective(self.pointiness, Self::DEFAULT_POINTINESS, "pointiness")
    }
}

fn effective(value: Option<f64>, default: f64, name: &str) -> f64 {
    match value {
        Some(v) if v.is_nan() => {
            log::warn!("master {name} is NaN; using default {default}");
            default
        }
        Some(v) => v,
        None => default,
    }
}

/// Clamps into `[0, 100]`, mapping NaN to 0.
#[inline]
fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) }
}

/// Scales `base` by the master controls.
///
/// - peak height: `min(master, 100) / 100` times each base peak height
/// - pointiness: `master / 50` times each base pointiness
///
/// Both results are clamped to `[0, 100]`, so out-of-range masters (negative,
/// far above 100, infinite) never leak out-of-range values into synthesis.
/// Layer `i` gets `gradient_map[i]` as its gradient reference; layers past the
/// end of the map get an empty reference.
pub fn scale_layers(masters: MasterControls, base: &[BaseLayer], gradient_map: &[&str]) -> Vec<ShapeParams> {
    let peak_scale = masters.peak_height().min(100.0) / 100.0;
    let pointiness_scale = masters.pointiness() / 50.0;

    if base.len() > gradient_map.len() {
        log::warn!(
            "{} layers but only {} gradient references; extra layers are left unreferenced",
            base.len(),
            gradient_map.len()
        );
    }

    base.iter()
        .enumerate()
        .map(|(i, layer)| {
            let scaled = BaseLayer {
                peak_height: clamp_percent(layer.peak_height * peak_scale),
                pointiness: clamp_percent(layer.pointiness * pointiness_scale),
                ..*layer
            };
            scaled.with_gradient(gradient_map.get(i).copied().unwrap_or_default())
        })
        .collect()
}
