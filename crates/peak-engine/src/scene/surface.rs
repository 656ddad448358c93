use crate::paint::ResolvedGradient;

use super::LayerCmd;

/// Consumer of a composed scene (SVG writer, rasterizer, test recorder, ...).
///
/// [`DrawList::paint_onto`](super::DrawList::paint_onto) calls, in this order:
/// 1) `declare_gradient` once per gradient, in declaration order
/// 2) `declare_blur` once per blurred layer
/// 3) `fill_layer` once per layer, back-to-front
///
/// Gradient geometry is in the scene's coordinate space, not relative to the
/// bounding box of the shapes that reference it.
pub trait RenderSurface {
    fn declare_gradient(&mut self, gradient: &ResolvedGradient);

    /// A blur filter for one layer. Radii differ per layer, so filters are never shared.
    fn declare_blur(&mut self, layer_index: usize, radius: f64);

    fn fill_layer(&mut self, layer: &LayerCmd);
}
