use crate::shape::PeakPath;

/// One layer fill: outline, gradient reference, and optional blur.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerCmd {
    /// Position in the layer stack. 0 is the bottom-most layer.
    pub index: usize,
    pub path: PeakPath,
    /// Gradient id to fill with. `None` = paint unfilled.
    pub fill: Option<String>,
    /// Gaussian blur radius scoped to this layer only.
    pub blur: Option<f64>,
}

impl LayerCmd {
    #[inline]
    pub fn new(index: usize, path: PeakPath, fill: Option<String>, blur: Option<f64>) -> Self {
        Self { index, path, fill, blur }
    }
}
