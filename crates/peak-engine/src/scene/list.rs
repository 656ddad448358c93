use crate::coords::CoordSpace;
use crate::paint::ResolvedGradient;

use super::{LayerCmd, RenderSurface};

/// Recorded output of one composition pass.
///
/// Append-only: gradients in declaration order, layers in paint order
/// (first pushed = bottom-most). Each composition builds a fresh list.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    space: CoordSpace,
    gradients: Vec<ResolvedGradient>,
    layers: Vec<LayerCmd>,
}

impl DrawList {
    #[inline]
    pub fn new(space: CoordSpace) -> Self {
        Self { space, gradients: Vec::new(), layers: Vec::new() }
    }

    #[inline]
    pub fn space(&self) -> CoordSpace {
        self.space
    }

    #[inline]
    pub fn gradients(&self) -> &[ResolvedGradient] {
        &self.gradients
    }

    /// Layers in paint order (back-to-front).
    #[inline]
    pub fn layers(&self) -> &[LayerCmd] {
        &self.layers
    }

    pub fn gradient(&self, id: &str) -> Option<&ResolvedGradient> {
        self.gradients.iter().find(|g| g.id == id)
    }

    #[inline]
    pub fn push_gradient(&mut self, gradient: ResolvedGradient) {
        self.gradients.push(gradient);
    }

    /// Appends a layer on top of everything pushed so far.
    #[inline]
    pub fn push_layer(&mut self, layer: LayerCmd) {
        self.layers.push(layer);
    }

    /// Replays the list onto `surface`.
    pub fn paint_onto<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        for gradient in &self.gradients {
            surface.declare_gradient(gradient);
        }
        for layer in &self.layers {
            if let Some(radius) = layer.blur {
                surface.declare_blur(layer.index, radius);
            }
        }
        for layer in &self.layers {
            surface.fill_layer(layer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{GradientGeometry, resolve_linear_axis};
    use crate::shape::{BaseLayer, synthesize_path};

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl RenderSurface for Recorder {
        fn declare_gradient(&mut self, gradient: &ResolvedGradient) {
            self.0.push(format!("gradient {}", gradient.id));
        }
        fn declare_blur(&mut self, layer_index: usize, radius: f64) {
            self.0.push(format!("blur {layer_index} {radius}"));
        }
        fn fill_layer(&mut self, layer: &LayerCmd) {
            self.0.push(format!("fill {} {:?}", layer.index, layer.fill));
        }
    }

    fn layer(index: usize, blur: Option<f64>) -> LayerCmd {
        let shape = BaseLayer { width: 100.0, height: 50.0, peak_height: 50.0, pointiness: 50.0, baseline: 0.0, blur }
            .with_gradient("g");
        LayerCmd::new(index, synthesize_path(&shape, CoordSpace::NORMALIZED), Some("g".into()), blur)
    }

    #[test]
    fn paint_order_is_declarations_then_layers() {
        let mut list = DrawList::new(CoordSpace::NORMALIZED);
        list.push_gradient(ResolvedGradient {
            id: "g".into(),
            geometry: GradientGeometry::Linear(resolve_linear_axis(0.0, CoordSpace::NORMALIZED)),
            stops: vec![],
        });
        list.push_layer(layer(0, Some(7.0)));
        list.push_layer(layer(1, None));
        list.push_layer(layer(2, Some(3.0)));

        let mut rec = Recorder::default();
        list.paint_onto(&mut rec);
        assert_eq!(
            rec.0,
            [
                "gradient g",
                "blur 0 7",
                "blur 2 3",
                "fill 0 Some(\"g\")",
                "fill 1 Some(\"g\")",
                "fill 2 Some(\"g\")",
            ]
        );
    }

    #[test]
    fn gradient_lookup_by_id() {
        let mut list = DrawList::new(CoordSpace::NORMALIZED);
        assert!(list.gradient("g").is_none());
        list.push_gradient(ResolvedGradient {
            id: "g".into(),
            geometry: GradientGeometry::Radial { center: CoordSpace::NORMALIZED.center(), radius: 50.0 },
            stops: vec![],
        });
        assert!(list.gradient("g").is_some());
    }
}
